pub mod dummies;
