pub mod support;

mod compare;
mod errors;
mod general;
mod nodes;
mod route;
