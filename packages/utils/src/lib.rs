pub mod payment_checker;
