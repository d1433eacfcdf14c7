pub mod compare;
pub mod credit;
pub mod debit;
