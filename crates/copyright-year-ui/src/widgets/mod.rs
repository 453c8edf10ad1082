pub mod copyright_label;
