mod auth;
mod customers;
mod helpers;
mod transactions;
