pub mod analyze_products;
