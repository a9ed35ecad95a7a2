use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::analysis::report::{texts, Competitor, Growth, Marketing, Pricing, Report, Swot};

/// Read-only table of pre-authored reports keyed by lowercase company name.
#[derive(Debug, Clone, Default)]
pub struct CompanyCatalog {
  entries: HashMap<String, Report>,
}

static BUILTIN_CATALOG: OnceLock<Arc<CompanyCatalog>> = OnceLock::new();

impl CompanyCatalog {
  pub fn new<I>(entries: I) -> Self where I: IntoIterator<Item = (String, Report)> {
    let entries: HashMap<String, Report> = entries.into_iter()
      .map(|(key, report)| (key.to_lowercase(), report))
      .collect();
    CompanyCatalog { entries }
  }

  /// The reference table, built once per process.
  pub fn builtin() -> Arc<CompanyCatalog> {
    BUILTIN_CATALOG.get_or_init(|| Arc::new(CompanyCatalog::new(builtin_entries()))).clone()
  }

  pub fn get(&self, key: &str) -> Option<&Report> {
    self.entries.get(key)
  }

  pub fn keys(&self) -> Vec<String> {
    let mut keys: Vec<String> = self.entries.keys().cloned().collect();
    keys.sort();
    return keys;
  }
}

fn builtin_entries() -> Vec<(String, Report)> {
  vec![
    ("amazon".to_string(), amazon()),
    ("flipkart".to_string(), flipkart()),
    ("zomato".to_string(), zomato()),
    ("tata".to_string(), tata()),
  ]
}

fn amazon() -> Report {
  Report {
    swot: Swot {
      strengths: texts(&[
        "Dominant e-commerce platform with global reach",
        "AWS cloud computing leadership ($90B+ revenue)",
        "Prime membership ecosystem (200M+ subscribers)",
        "Advanced logistics and fulfillment network",
        "Strong brand recognition and customer trust",
      ]),
      weaknesses: texts(&[
        "Thin profit margins in retail segment",
        "Regulatory scrutiny and antitrust concerns",
        "High employee turnover rates",
        "Dependence on third-party sellers (60% of sales)",
        "Limited physical retail presence",
      ]),
      opportunities: texts(&[
        "Healthcare and pharmacy expansion",
        "Emerging markets penetration (India, Southeast Asia)",
        "AI and machine learning innovations",
        "Advertising revenue growth potential",
        "Smart home and IoT device ecosystem",
      ]),
      threats: texts(&[
        "Intense competition from Walmart, Alibaba, Shopify",
        "Labor disputes and unionization efforts",
        "Data privacy regulations (GDPR, CCPA)",
        "Economic downturns affecting consumer spending",
        "Cybersecurity and fraud risks",
      ]),
    },
    pestle: None,
    competitors: vec![
      Competitor::new("Walmart", "Retail Giant", "Physical + online omnichannel presence"),
      Competitor::new("Alibaba", "Asian E-commerce Leader", "Dominance in Chinese market"),
      Competitor::new("Microsoft Azure", "Cloud Competitor", "Enterprise relationships"),
    ],
    pricing: Pricing {
      strategy: "Penetration pricing and value-based pricing".to_string(),
      approach: "Competitive pricing with focus on volume over margins, premium for Prime services".to_string(),
      recommendations: texts(&[
        "Dynamic pricing algorithms for real-time optimization",
        "Bundling strategies with Prime and AWS services",
        "Psychological pricing ($9.99 vs $10.00) across categories",
      ]),
    },
    marketing: Marketing {
      target_audience: "Mass market consumers, businesses (SMBs to enterprises), developers".to_string(),
      channels: texts(&["Digital advertising", "Prime Video content", "Social media", "Email marketing", "Alexa voice platform"]),
      key_messages: texts(&[
        "Earth's most customer-centric company",
        "Fast, convenient delivery with Prime",
        "Endless selection and competitive prices",
        "Innovation in technology and services",
      ]),
    },
    growth: Growth {
      short_term: texts(&[
        "Expand grocery delivery and Amazon Fresh",
        "Grow AWS market share in AI/ML services",
        "Scale advertising business to $50B+",
        "Improve logistics efficiency with robotics",
      ]),
      long_term: texts(&[
        "Healthcare transformation via Amazon Pharmacy",
        "Autonomous delivery (drones, robots)",
        "Metaverse commerce integration",
        "Sustainability goals: net-zero carbon by 2040",
      ]),
      key_focus_areas: texts(&["AI & Machine Learning", "Logistics Innovation", "Content Creation", "Healthcare"]),
    },
  }
}

fn flipkart() -> Report {
  Report {
    swot: Swot {
      strengths: texts(&[
        "Leading e-commerce platform in India",
        "Strong logistics network (Ekart)",
        "Walmart backing and financial support",
        "Deep understanding of Indian consumer behavior",
        "Myntra and PhonePe ecosystem integration",
      ]),
      weaknesses: texts(&[
        "Not yet profitable despite scale",
        "Heavy cash burn on discounts and marketing",
        "Limited international presence",
        "Dependence on smartphone sales (40% of revenue)",
        "Regulatory challenges in India",
      ]),
      opportunities: texts(&[
        "Tier 2 and Tier 3 city expansion",
        "Grocery and fresh produce delivery",
        "Digital payments through PhonePe",
        "B2B wholesale marketplace",
        "Social commerce and video shopping",
      ]),
      threats: texts(&[
        "Amazon India aggressive expansion",
        "Reliance JioMart disruption",
        "Government regulations favoring local sellers",
        "Rising customer acquisition costs",
        "Quick commerce competition (Swiggy Instamart, Zepto)",
      ]),
    },
    pestle: None,
    competitors: vec![
      Competitor::new("Amazon India", "Global E-commerce Giant", "Technology and financial resources"),
      Competitor::new("Reliance JioMart", "Kirana Network Aggregator", "Offline retail integration"),
      Competitor::new("Meesho", "Social Commerce Leader", "Reseller network and vernacular reach"),
    ],
    pricing: Pricing {
      strategy: "Competitive pricing with festival discounts".to_string(),
      approach: "Aggressive promotional pricing during Big Billion Days, EMI options for affordability".to_string(),
      recommendations: texts(&[
        "Price matching guarantees on key categories",
        "Subscription model similar to Prime",
        "Dynamic surge pricing during high demand periods",
      ]),
    },
    marketing: Marketing {
      target_audience: "Indian middle-class consumers (18-45 years), tier 2/3 city shoppers".to_string(),
      channels: texts(&["TV advertising", "Digital marketing", "Cricket sponsorships", "Influencer partnerships", "Regional language content"]),
      key_messages: texts(&[
        "India ki apni dukaan (India's own store)",
        "Biggest discounts during festive sales",
        "Trusted quality and genuine products",
        "Easy returns and customer support",
      ]),
    },
    growth: Growth {
      short_term: texts(&[
        "Launch Flipkart Minutes (quick commerce)",
        "Expand Flipkart Health+ to 100 cities",
        "Double seller base to 2 million+",
        "Improve delivery speed in metro cities",
      ]),
      long_term: texts(&[
        "Achieve profitability by 2026",
        "IPO preparation and public listing",
        "International expansion (Middle East, Southeast Asia)",
        "Build comprehensive fintech ecosystem",
      ]),
      key_focus_areas: texts(&["Quick Commerce", "Vernacular Experience", "Supply Chain", "Fintech"]),
    },
  }
}

fn zomato() -> Report {
  Report {
    swot: Swot {
      strengths: texts(&[
        "Market leader in food delivery (55% market share)",
        "Diversified revenue: food delivery, dining out, Blinkit",
        "Strong brand recall and app engagement",
        "Large restaurant partner network (250K+)",
        "Successful quick commerce acquisition (Blinkit)",
      ]),
      weaknesses: texts(&[
        "High customer acquisition and retention costs",
        "Thin margins due to discounting wars",
        "Dependence on delivery partners (gig economy challenges)",
        "Limited geographic coverage outside India",
        "Competition from well-funded rivals",
      ]),
      opportunities: texts(&[
        "Tier 2/3 city expansion (untapped 70% market)",
        "Cloud kitchens and private label brands",
        "Subscription revenue growth (Zomato Gold)",
        "B2B food supply chain (Hyperpure expansion)",
        "International market entry",
      ]),
      threats: texts(&[
        "Swiggy competition and market share battles",
        "Rising delivery costs and fuel prices",
        "Food safety regulations and liability",
        "Economic slowdown reducing discretionary spending",
        "Restaurant commission disputes",
      ]),
    },
    pestle: None,
    competitors: vec![
      Competitor::new("Swiggy", "Food Delivery Rival", "Instamart quick commerce leadership"),
      Competitor::new("ONDC", "Government Initiative", "Zero-commission open network"),
      Competitor::new("Uber Eats (exited India)", "Former Competitor", "Global platform experience"),
    ],
    pricing: Pricing {
      strategy: "Dynamic pricing with platform fees".to_string(),
      approach: "Variable delivery fees based on distance/time, surge pricing during peak hours, membership discounts".to_string(),
      recommendations: texts(&[
        "Tiered membership plans (Gold, Platinum)",
        "Loyalty rewards program for frequent users",
        "Strategic partnerships for bundled offers",
      ]),
    },
    marketing: Marketing {
      target_audience: "Urban millennials and Gen Z (20-40 years), working professionals, families".to_string(),
      channels: texts(&["Social media campaigns", "Influencer collaborations", "IPL sponsorships", "In-app notifications", "Email/SMS marketing"]),
      key_messages: texts(&[
        "Food delivered fast and fresh",
        "Wide variety from local to premium restaurants",
        "Transparent pricing and live tracking",
        "Save with Zomato Gold membership",
      ]),
    },
    growth: Growth {
      short_term: texts(&[
        "Achieve GOV (Gross Order Value) growth of 30%+",
        "Expand Blinkit to 1000+ dark stores",
        "Improve delivery times to under 30 minutes",
        "Scale Hyperpure to 50 cities",
      ]),
      long_term: texts(&[
        "Become profitable across all business units",
        "International expansion (Middle East, Southeast Asia)",
        "Build complete food ecosystem (farm to fork)",
        "AI-powered personalization and recommendations",
      ]),
      key_focus_areas: texts(&["Quick Commerce", "Cloud Kitchens", "Subscriptions", "Technology"]),
    },
  }
}

fn tata() -> Report {
  Report {
    swot: Swot {
      strengths: texts(&[
        "Diversified conglomerate across 100+ companies",
        "Strong brand reputation and trust (India's most trusted brand)",
        "Presence in steel, automotive, IT, consumer goods, airlines",
        "Vertical integration and supply chain control",
        "Strong CSR and ethical business practices",
      ]),
      weaknesses: texts(&[
        "Complex organizational structure across subsidiaries",
        "Some underperforming businesses (Tata Steel Europe)",
        "Slower decision-making due to bureaucracy",
        "Limited global brand recognition vs competitors",
        "Legacy costs and pension obligations",
      ]),
      opportunities: texts(&[
        "Electric vehicle revolution (Tata Motors)",
        "Digital transformation across all businesses",
        "Super app strategy (Tata Neu ecosystem)",
        "Renewable energy and green technologies",
        "Global expansion in technology services",
      ]),
      threats: texts(&[
        "Global economic uncertainty and recession risks",
        "Competition from specialized players in each sector",
        "Technology disruption in traditional businesses",
        "Rising input costs (steel, commodities)",
        "Geopolitical tensions affecting international operations",
      ]),
    },
    pestle: None,
    competitors: vec![
      Competitor::new("Reliance Industries", "Diversified Conglomerate", "Aggressive digital and retail expansion"),
      Competitor::new("Adani Group", "Infrastructure Giant", "Ports, energy, and logistics dominance"),
      Competitor::new("Mahindra Group", "Automotive & Agri Leader", "Strong rural and SUV market presence"),
    ],
    pricing: Pricing {
      strategy: "Value-based and premium positioning".to_string(),
      approach: "Competitive pricing in mass segments (Tata Motors), premium in services (Taj Hotels, TCS consulting)".to_string(),
      recommendations: texts(&[
        "Bundle pricing across Tata Neu ecosystem",
        "Subscription models for connected services",
        "Competitive EV pricing to drive adoption",
      ]),
    },
    marketing: Marketing {
      target_audience: "Mass market to premium customers across demographics, B2B enterprises, government".to_string(),
      channels: texts(&["Mass media (TV, Print)", "Digital transformation", "Experiential marketing", "Sports sponsorships", "CSR initiatives"]),
      key_messages: texts(&[
        "India's most trusted brand",
        "Nation-building through business",
        "Innovation for sustainable growth",
        "Quality and reliability across all touchpoints",
      ]),
    },
    growth: Growth {
      short_term: texts(&[
        "Scale Tata Neu super app to 100M+ users",
        "Grow EV sales to 500K+ units annually",
        "Expand TCS AI and cloud services",
        "Integrate Air India operations smoothly",
      ]),
      long_term: texts(&[
        "Become carbon-neutral across all businesses by 2045",
        "Build global leadership in EV and battery tech",
        "Create India's largest digital ecosystem",
        "Double revenues through new-age businesses",
      ]),
      key_focus_areas: texts(&["Electric Mobility", "Digital Services", "Sustainability", "Super App"]),
    },
  }
}
