use std::fmt::Write as _;

use crate::domain::skincare_analysis::entities::Product;

const RESPONSE_CONTRACT: &str = r#"Respond with ONLY a JSON object, without markdown code fences and without any commentary, using exactly this structure:
{
  "products": [
    {
      "name": "product name",
      "description": "what the product does and how to apply it",
      "usageTime": ["AM", "PM"],
      "frequency": "how often to use it",
      "conflictsWith": ["names of products it should not be combined with"]
    }
  ],
  "recommendedRoutine": {
    "AM": ["product names in application order"],
    "PM": ["product names in application order"]
  },
  "conflicts": [
    {
      "products": ["first product name", "second product name"],
      "reason": "why these products should not be used together"
    }
  ]
}"#;

/// Build the analysis prompt for a list of products.
///
/// Products are enumerated by 1-based position; the output is fully
/// determined by the input order.
pub fn build_analysis_prompt(products: &[Product]) -> String {
    let mut prompt = String::from(
        "You are a skincare expert. Analyze the following skincare products. \
         For each product, explain what it does, when to use it (AM, PM or both) \
         and how often. Identify ingredient conflicts between the products and \
         recommend an ordered AM and PM routine using only the listed products.\n\n\
         Products:\n",
    );

    for (index, product) in products.iter().enumerate() {
        let _ = writeln!(
            prompt,
            "{}. {} (Type: {})",
            index + 1,
            product.name,
            product.product_type
        );
    }

    prompt.push('\n');
    prompt.push_str(RESPONSE_CONTRACT);
    prompt
}
