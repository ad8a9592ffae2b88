pub mod points_lookup;
