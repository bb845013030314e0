/// (category key, category title, exercises)
/// Each exercise is (id, title, description). The id is unique across the catalogue.
pub type CatalogEntry = (
    &'static str,
    &'static str,
    &'static [(&'static str, &'static str, &'static str)],
);

pub const PRACTICE_CATALOG: &[CatalogEntry] = &[
    (
        "pitch",
        "Cao độ & khuông nhạc",
        &[
            (
                "note-reading-treble",
                "Đọc nốt khóa Sol",
                "Nhận biết tên nốt trên khuông nhạc khóa Sol.",
            ),
            (
                "note-reading-bass",
                "Đọc nốt khóa Fa",
                "Nhận biết tên nốt trên khuông nhạc khóa Fa.",
            ),
            (
                "ledger-lines",
                "Nốt trên dòng kẻ phụ",
                "Đọc các nốt nằm ngoài năm dòng kẻ.",
            ),
            (
                "accidentals",
                "Dấu hóa bất thường",
                "Thăng, giáng, bình và ảnh hưởng của chúng lên cao độ.",
            ),
        ],
    ),
    (
        "rhythm",
        "Tiết tấu",
        &[
            (
                "note-values",
                "Trường độ nốt nhạc",
                "So sánh trường độ của nốt tròn, trắng, đen, móc đơn và móc kép.",
            ),
            (
                "time-signatures",
                "Số chỉ nhịp",
                "Xác định số chỉ nhịp phù hợp cho một ô nhịp.",
            ),
            (
                "rhythm-dictation",
                "Nghe và ghi tiết tấu",
                "Nghe một đoạn tiết tấu ngắn và chọn cách ghi đúng.",
            ),
        ],
    ),
    (
        "intervals",
        "Quãng",
        &[
            (
                "interval-identification",
                "Nhận biết quãng",
                "Gọi tên quãng giữa hai nốt trên khuông nhạc.",
            ),
            (
                "interval-ear-training",
                "Luyện tai quãng",
                "Nghe hai âm và xác định khoảng cách giữa chúng.",
            ),
        ],
    ),
    (
        "scales",
        "Gam & giọng",
        &[
            (
                "major-scales",
                "Gam trưởng",
                "Xây dựng gam trưởng từ một chủ âm bất kỳ.",
            ),
            (
                "minor-scales",
                "Gam thứ",
                "Phân biệt gam thứ tự nhiên, hòa âm và giai điệu.",
            ),
            (
                "key-signatures",
                "Hóa biểu",
                "Xác định giọng từ hóa biểu và ngược lại.",
            ),
        ],
    ),
    (
        "chords",
        "Hợp âm",
        &[
            (
                "triads",
                "Hợp âm ba",
                "Nhận biết hợp âm ba trưởng, thứ, tăng và giảm.",
            ),
            (
                "chord-ear-training",
                "Luyện tai hợp âm",
                "Nghe và phân loại tính chất của hợp âm.",
            ),
        ],
    ),
];
