pub mod contest {
    pub mod countdown;
    pub mod join_form;
    pub mod labels;
    pub mod past_table;
    pub mod row;
}
pub mod footer;
pub mod nav;
pub mod version_display;
