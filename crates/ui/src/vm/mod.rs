mod quiz_vm;

pub use quiz_vm::{
    NoticeVm, OptionButtonVm, QuestionButtonVm, map_notice, map_option_buttons,
    map_question_buttons,
};
