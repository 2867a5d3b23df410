pub mod band_list;
pub mod message_input_box;
pub mod message_list;
