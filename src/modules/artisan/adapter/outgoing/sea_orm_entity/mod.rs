pub mod artisans;
