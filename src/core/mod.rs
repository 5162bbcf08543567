pub mod aggregate;
pub mod filter;
pub mod logic;
pub mod normalize;
pub mod payroll;
pub mod rates;
pub mod view_state;
pub mod week;
