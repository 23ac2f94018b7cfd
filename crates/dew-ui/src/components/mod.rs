pub(crate) mod atoms;
pub(crate) mod people_table;
pub(crate) mod toast;
pub(crate) mod toolbar;
