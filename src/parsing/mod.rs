//! ASP.NET form sayfalarından gizli alanları ve dropdown listelerini çıkaran
//! pattern tabanlı ayrıştırıcılar.

pub mod form_state;
pub mod lists;

pub use form_state::{build_postback, extract_form_state};
pub use lists::{fetch_neighborhoods, parse_districts, parse_options, parse_provinces};
