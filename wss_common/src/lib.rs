mod helpers;
mod price;

pub mod op;

pub use helpers::parse_boolean_flag;
pub use price::{Price, PriceConversionError, SHOP_CURRENCY_CODE, SHOP_CURRENCY_CODE_LOWER};
