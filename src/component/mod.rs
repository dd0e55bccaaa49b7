pub mod electric_border;
