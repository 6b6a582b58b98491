//! Custom Askama template filters.

use std::fmt::Display;

/// Format a decimal amount as a dollar price string.
///
/// Usage in templates: `{{ product.price|money }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn money(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("${value:.2}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use askama::Template;
    use rust_decimal::Decimal;

    use crate::filters;

    #[derive(Template)]
    #[template(source = "{{ value|money }}", ext = "html")]
    struct Price {
        value: Decimal,
    }

    #[test]
    fn test_money_pads_to_two_decimals() {
        let rendered = Price { value: Decimal::new(10995, 2) }.render().unwrap();
        assert_eq!(rendered, "$109.95");
        assert_eq!(Price { value: Decimal::new(5, 0) }.render().unwrap(), "$5.00");
    }
}
