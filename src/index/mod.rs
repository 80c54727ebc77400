pub mod diagram_index;
pub mod render_info;
