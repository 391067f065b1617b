//! Display formatting for terminal output

pub mod account;
pub mod payment;

pub use account::{format_account_details, format_account_list};
pub use payment::{
    format_favorite_list, format_favorite_row, format_payment_list, format_payment_row,
};
