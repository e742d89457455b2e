pub mod cash_flow;
pub mod fund;
pub mod returns;
pub mod shareholder;
