//! Business-plan report assembly.

mod assembler;

pub use assembler::{
    assemble_sections, draft_markdown, report_user_prompt, ReportSection, REPORT_AXIS_ORDER,
    REPORT_SYSTEM_PROMPT,
};
