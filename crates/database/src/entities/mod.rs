pub mod layouts;
