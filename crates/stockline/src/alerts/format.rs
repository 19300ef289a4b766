//! Composition of the batched low-stock alert message.

use super::notifier::AlertMessage;
use crate::model::Product;

/// Builds the single batched message covering every low product. Callers pass
/// the products sorted by stock ascending so the most urgent items lead.
pub fn low_stock_message(recipient: &str, products: &[Product], threshold: f64) -> AlertMessage {
    AlertMessage {
        recipient: recipient.to_string(),
        subject: format!(
            "Low Stock Alert: {} item(s) need attention",
            products.len()
        ),
        text_body: text_body(products, threshold),
        html_body: html_body(products, threshold),
    }
}

fn text_body(products: &[Product], threshold: f64) -> String {
    let mut body = format!(
        "The following products are below the stock threshold of {threshold}:\n\n"
    );
    for product in products {
        body.push_str(&format!(
            "- {}: {} remaining{}\n",
            product.name,
            product.stock,
            product
                .category
                .as_deref()
                .map(|c| format!(" ({c})"))
                .unwrap_or_default()
        ));
    }
    body.push_str("\nPlease restock these items soon.\n");
    body
}

fn html_body(products: &[Product], threshold: f64) -> String {
    let mut rows = String::new();
    for product in products {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            product.name,
            product.stock,
            product.category.as_deref().unwrap_or("-")
        ));
    }
    format!(
        "<h2>Low Stock Alert</h2>\
         <p>The following products are below the stock threshold of {threshold}:</p>\
         <table border=\"1\" cellpadding=\"4\">\
         <tr><th>Product</th><th>Stock</th><th>Category</th></tr>{rows}</table>\
         <p>Please restock these items soon.</p>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductCreate, ProductId};
    use resource_actor::ActorEntity;

    fn product(id: u32, name: &str, stock: f64) -> Product {
        Product::from_create_params(ProductId(id), ProductCreate::raw(name, 1.0, stock)).unwrap()
    }

    #[test]
    fn subject_counts_items_and_bodies_name_each_product() {
        let low = vec![product(1, "Flour", 2.0), product(2, "Sugar", 7.5)];
        let message = low_stock_message("ops@example.com", &low, 10.0);

        assert_eq!(message.recipient, "ops@example.com");
        assert_eq!(message.subject, "Low Stock Alert: 2 item(s) need attention");
        assert!(message.text_body.contains("- Flour: 2 remaining"));
        assert!(message.text_body.contains("- Sugar: 7.5 remaining"));
        assert!(message.html_body.contains("<td>Flour</td>"));
        assert!(message.html_body.contains("threshold of 10"));
    }
}
