pub mod stage1_validate;
pub mod stage2_gap;
pub mod stage3_report;
