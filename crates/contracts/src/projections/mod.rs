pub mod p100_orders;
