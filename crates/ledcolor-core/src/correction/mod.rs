//! Output correction — gamma tables, white balance, and the per-pixel chain.

pub mod gamma;
pub mod pipeline;
pub mod white_balance;
