use crate::domain::skincare_analysis::entities::Product;

#[derive(Debug, Clone)]
pub struct AnalyzeProductsInput {
    pub products: Vec<Product>,
}
