use std::sync::{Arc, OnceLock};

use crate::analysis::report::{texts, Competitor, Growth, Marketing, Pestle, Pricing, Report, Swot};

pub const COMPANY_PLACEHOLDER: &str = "{company}";

/// A report whose text fields may name the company through `{company}`.
#[derive(Debug, Clone)]
pub struct ReportTemplate {
  skeleton: Report,
}

static GENERIC_TEMPLATE: OnceLock<Arc<ReportTemplate>> = OnceLock::new();

impl ReportTemplate {
  pub fn new(skeleton: Report) -> Self {
    ReportTemplate { skeleton }
  }

  /// Fallback used for every company without a pre-authored entry.
  pub fn generic() -> Arc<ReportTemplate> {
    GENERIC_TEMPLATE.get_or_init(|| Arc::new(ReportTemplate::new(generic_skeleton()))).clone()
  }

  pub fn render(&self, company: &str) -> Report {
    self.skeleton.map_text(|text| text.replace(COMPANY_PLACEHOLDER, company))
  }
}

fn generic_skeleton() -> Report {
  Report {
    swot: Swot {
      strengths: texts(&[
        "{company} has established strong brand recognition in its market",
        "Diversified product/service portfolio",
        "Strong customer loyalty and repeat business",
        "Efficient operational processes",
        "Skilled workforce and company culture",
      ]),
      weaknesses: texts(&[
        "Limited market share in certain segments",
        "Dependence on key revenue streams",
        "Higher operational costs compared to competitors",
        "Need for digital transformation acceleration",
        "Geographic concentration risks",
      ]),
      opportunities: texts(&[
        "Expansion into emerging markets",
        "Digital innovation and AI adoption",
        "Strategic partnerships and acquisitions",
        "New product/service development",
        "Sustainability and ESG leadership",
      ]),
      threats: texts(&[
        "Intense competition from established and new players",
        "Regulatory changes and compliance costs",
        "Economic uncertainty and inflation",
        "Technological disruption",
        "Changing consumer preferences",
      ]),
    },
    pestle: Some(Pestle {
      political: "{company} operates in a dynamic political environment with varying regulations across markets. Government policies on trade, taxation, and industry-specific regulations significantly impact operations.".to_string(),
      economic: "Global economic conditions, inflation rates, interest rates, and currency fluctuations affect purchasing power, operational costs, and expansion capabilities.".to_string(),
      social: "Changing consumer behaviors, demographic shifts, health consciousness, and social media influence shape market demand and brand perception.".to_string(),
      technological: "Rapid technological advancement, AI/ML adoption, automation, and digital transformation are critical for maintaining competitive advantage.".to_string(),
      legal: "Compliance with labor laws, data protection regulations (GDPR, CCPA), intellectual property rights, and industry-specific regulations is essential.".to_string(),
      environmental: "Sustainability pressures, carbon footprint reduction, circular economy principles, and climate change considerations impact business strategies.".to_string(),
    }),
    competitors: vec![
      Competitor::new("Market Leader A", "Dominant Player", "Strong brand equity and market share"),
      Competitor::new("Innovative Disruptor", "Technology-Driven", "Cutting-edge technology and agility"),
      Competitor::new("Value Provider", "Cost Leader", "Competitive pricing and efficiency"),
    ],
    pricing: Pricing {
      strategy: "Value-based pricing aligned with market positioning".to_string(),
      approach: "Competitive analysis-driven pricing with flexibility for premium offerings and promotional strategies".to_string(),
      recommendations: texts(&[
        "Implement dynamic pricing based on demand patterns",
        "Develop tiered pricing for different customer segments",
        "Use psychological pricing strategies for consumer products",
        "Create bundled offerings for increased value perception",
      ]),
    },
    marketing: Marketing {
      target_audience: "Primary target includes millennials and Gen Z consumers, with secondary focus on established professionals and families".to_string(),
      channels: texts(&["Social Media Marketing", "Content Marketing", "SEO/SEM", "Email Marketing", "Influencer Partnerships", "Traditional Media"]),
      key_messages: texts(&[
        "{company} delivers exceptional value and innovation",
        "Customer-centric approach with personalized experiences",
        "Quality and reliability you can trust",
        "Sustainable and socially responsible business practices",
      ]),
    },
    growth: Growth {
      short_term: texts(&[
        "Optimize current operations for efficiency gains",
        "Launch targeted marketing campaigns for customer acquisition",
        "Expand product/service offerings in core markets",
        "Strengthen digital presence and e-commerce capabilities",
      ]),
      long_term: texts(&[
        "Geographic expansion into high-growth markets",
        "Strategic acquisitions to enhance capabilities",
        "Build sustainable competitive advantages through innovation",
        "Create ecosystem partnerships for expanded reach",
      ]),
      key_focus_areas: texts(&["Digital Transformation", "Customer Experience", "Innovation", "Sustainability", "Market Expansion"]),
    },
  }
}
