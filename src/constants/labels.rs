// Display fallbacks shown by the front end when a field could not be resolved.

pub const QUIZ_TITLE_FALLBACK: &str = "Bài kiểm tra";

pub const QUIZ_DESCRIPTION_FALLBACK: &str = "Chưa có mô tả cho bài kiểm tra này.";

pub const COURSE_NAME_FALLBACK: &str = "Lý thuyết âm nhạc cơ bản";

pub const MODULE_NAME_FALLBACK: &str = "Kiến thức nền tảng";
