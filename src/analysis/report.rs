use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swot {
  pub strengths: Vec<String>,
  pub weaknesses: Vec<String>,
  pub opportunities: Vec<String>,
  pub threats: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pestle {
  pub political: String,
  pub economic: String,
  pub social: String,
  pub technological: String,
  pub legal: String,
  pub environmental: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
  pub name: String,
  pub position: String,
  pub key_strength: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
  pub strategy: String,
  pub approach: String,
  pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marketing {
  pub target_audience: String,
  pub channels: Vec<String>,
  pub key_messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Growth {
  pub short_term: Vec<String>,
  pub long_term: Vec<String>,
  pub key_focus_areas: Vec<String>,
}

/// The full analysis record returned for one company name.
///
/// Pre-authored entries carry no PESTLE section, so `pestle` is optional and
/// left out of the JSON payload when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
  pub swot: Swot,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pestle: Option<Pestle>,
  pub competitors: Vec<Competitor>,
  pub pricing: Pricing,
  pub marketing: Marketing,
  pub growth: Growth,
}

impl Competitor {
  pub fn new(name: &str, position: &str, key_strength: &str) -> Self {
    Competitor { name: name.to_string(), position: position.to_string(), key_strength: key_strength.to_string() }
  }
}

/// Owned copy of a literal list.
pub fn texts(items: &[&str]) -> Vec<String> {
  items.iter().map(|item| item.to_string()).collect()
}

fn filled(text: &str) -> bool {
  !text.trim().is_empty()
}

fn all_filled(items: &[String]) -> bool {
  !items.is_empty() && items.iter().all(|item| filled(item))
}

impl Report {

  /// True when every list is non-empty and no text field is blank.
  pub fn is_complete(&self) -> bool {
    let swot: bool = all_filled(&self.swot.strengths) && all_filled(&self.swot.weaknesses)
      && all_filled(&self.swot.opportunities) && all_filled(&self.swot.threats);

    let pestle: bool = match &self.pestle {
      Some(p) => [&p.political, &p.economic, &p.social, &p.technological, &p.legal, &p.environmental]
        .iter().all(|field| filled(field)),
      None => true,
    };

    let competitors: bool = !self.competitors.is_empty() && self.competitors.iter().all(|c| {
      filled(&c.name) && filled(&c.position) && filled(&c.key_strength)
    });

    let pricing: bool = filled(&self.pricing.strategy) && filled(&self.pricing.approach)
      && all_filled(&self.pricing.recommendations);

    let marketing: bool = filled(&self.marketing.target_audience)
      && all_filled(&self.marketing.channels) && all_filled(&self.marketing.key_messages);

    let growth: bool = all_filled(&self.growth.short_term) && all_filled(&self.growth.long_term)
      && all_filled(&self.growth.key_focus_areas);

    return swot && pestle && competitors && pricing && marketing && growth;
  }

  /// Rebuilds the report with `f` applied to every text field, keeping order.
  pub fn map_text<F>(&self, f: F) -> Report where F: Fn(&str) -> String {
    let list = |items: &Vec<String>| -> Vec<String> { items.iter().map(|item| f(item)).collect() };

    Report {
      swot: Swot {
        strengths: list(&self.swot.strengths),
        weaknesses: list(&self.swot.weaknesses),
        opportunities: list(&self.swot.opportunities),
        threats: list(&self.swot.threats),
      },
      pestle: self.pestle.as_ref().map(|p| Pestle {
        political: f(&p.political),
        economic: f(&p.economic),
        social: f(&p.social),
        technological: f(&p.technological),
        legal: f(&p.legal),
        environmental: f(&p.environmental),
      }),
      competitors: self.competitors.iter().map(|c| Competitor {
        name: f(&c.name),
        position: f(&c.position),
        key_strength: f(&c.key_strength),
      }).collect(),
      pricing: Pricing {
        strategy: f(&self.pricing.strategy),
        approach: f(&self.pricing.approach),
        recommendations: list(&self.pricing.recommendations),
      },
      marketing: Marketing {
        target_audience: f(&self.marketing.target_audience),
        channels: list(&self.marketing.channels),
        key_messages: list(&self.marketing.key_messages),
      },
      growth: Growth {
        short_term: list(&self.growth.short_term),
        long_term: list(&self.growth.long_term),
        key_focus_areas: list(&self.growth.key_focus_areas),
      },
    }
  }
}
