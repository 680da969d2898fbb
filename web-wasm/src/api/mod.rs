//! バックエンドAPI連携

mod backend;

pub use backend::{
    ask_questions, compare_files, decode_text, encode_text, search_with_voice, summarize_document,
    translate_document,
};
