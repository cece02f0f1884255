//! Static translation tables.
//!
//! Each entry maps a key to `(locale code, text)` pairs. Adding a locale only
//! requires adding pairs here and a line in [SUPPORTED_LANGUAGES].

/// Translations for one key.
pub(super) type Entry = (&'static str, &'static [(&'static str, &'static str)]);

/// The supported locale codes and their native names, in selector order.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("zh-CN", "简体中文"),
    ("ja-JP", "日本語"),
    ("en-US", "English"),
];

pub(super) const COLUMN_TRANSLATIONS: &[Entry] = &[
    (
        "PAYMENT_CLASSIFICATION",
        &[
            ("zh-CN", "支付分类"),
            ("ja-JP", "支払分類"),
            ("en-US", "Payment Classification"),
        ],
    ),
    (
        "AMOUNT",
        &[("zh-CN", "金额"), ("ja-JP", "金額"), ("en-US", "Amount")],
    ),
    (
        "PAYMENT_DATE",
        &[
            ("zh-CN", "支付日期"),
            ("ja-JP", "支払日"),
            ("en-US", "Payment Date"),
        ],
    ),
    (
        "COMMENT",
        &[("zh-CN", "备注"), ("ja-JP", "備考"), ("en-US", "Comment")],
    ),
];

pub(super) const TEXT_TRANSLATIONS: &[Entry] = &[
    (
        "PAGE_TITLE",
        &[
            ("zh-CN", "家庭费用管理"),
            ("ja-JP", "家庭費用管理"),
            ("en-US", "Family Expense Management"),
        ],
    ),
    (
        "PAGE_SUBTITLE",
        &[
            ("zh-CN", "查看和管理家庭费用支出记录"),
            ("ja-JP", "家庭費用支出記録の確認と管理"),
            ("en-US", "View and manage family expense records"),
        ],
    ),
    (
        "MONTHLY_PAGE_TITLE",
        &[
            ("zh-CN", "月度费用管理"),
            ("ja-JP", "月次費用管理"),
            ("en-US", "Monthly Expense Management"),
        ],
    ),
    (
        "MONTHLY_PAGE_SUBTITLE",
        &[
            ("zh-CN", "查看和管理月度费用支出记录"),
            ("ja-JP", "月次費用支出記録の確認と管理"),
            ("en-US", "View and manage monthly expense records"),
        ],
    ),
    (
        "LANGUAGE_LABEL",
        &[("zh-CN", "语言:"), ("ja-JP", "言語:"), ("en-US", "Language:")],
    ),
    (
        "MONTH_LABEL",
        &[("zh-CN", "月份:"), ("ja-JP", "月:"), ("en-US", "Month:")],
    ),
    // `{year}`, `{month}` (1 to 12) and `{month_abbr}` ("Aug") are filled in.
    (
        "MONTH_OPTION_FORMAT",
        &[
            ("zh-CN", "{year}年{month}月"),
            ("ja-JP", "{year}年{month}月"),
            ("en-US", "{month_abbr} {year}"),
        ],
    ),
    (
        "LAST_UPDATED",
        &[
            ("zh-CN", "最后更新:"),
            ("ja-JP", "最終更新:"),
            ("en-US", "Last Updated:"),
        ],
    ),
    (
        "REFRESH_BUTTON",
        &[
            ("zh-CN", "刷新数据"),
            ("ja-JP", "データ更新"),
            ("en-US", "Refresh Data"),
        ],
    ),
    (
        "REFRESHING",
        &[
            ("zh-CN", "刷新中..."),
            ("ja-JP", "更新中..."),
            ("en-US", "Refreshing..."),
        ],
    ),
    (
        "SHOW_STATS",
        &[
            ("zh-CN", "连接状态"),
            ("ja-JP", "接続状態"),
            ("en-US", "Connection"),
        ],
    ),
    (
        "HIDE_STATS",
        &[
            ("zh-CN", "隐藏状态"),
            ("ja-JP", "状態非表示"),
            ("en-US", "Hide Status"),
        ],
    ),
    (
        "TOTAL_AMOUNT",
        &[
            ("zh-CN", "合计金额"),
            ("ja-JP", "合計金額"),
            ("en-US", "Total Amount"),
        ],
    ),
    (
        "TOTAL_RECORDS",
        &[
            ("zh-CN", "总记录数"),
            ("ja-JP", "総レコード数"),
            ("en-US", "Total Records"),
        ],
    ),
    (
        "COLUMN_COUNT",
        &[
            ("zh-CN", "数据列数"),
            ("ja-JP", "データ列数"),
            ("en-US", "Columns"),
        ],
    ),
    (
        "DATABASE_STATUS",
        &[
            ("zh-CN", "数据库状态"),
            ("ja-JP", "データベース状態"),
            ("en-US", "Database Status"),
        ],
    ),
    (
        "CONNECTED",
        &[
            ("zh-CN", "已连接"),
            ("ja-JP", "接続済み"),
            ("en-US", "Connected"),
        ],
    ),
    (
        "DISCONNECTED",
        &[
            ("zh-CN", "未连接"),
            ("ja-JP", "未接続"),
            ("en-US", "Disconnected"),
        ],
    ),
    (
        "LOADING",
        &[
            ("zh-CN", "正在加载数据..."),
            ("ja-JP", "データを読み込み中..."),
            ("en-US", "Loading data..."),
        ],
    ),
    (
        "LOAD_FAILED",
        &[
            ("zh-CN", "加载失败"),
            ("ja-JP", "読み込みに失敗しました"),
            ("en-US", "Failed to load data"),
        ],
    ),
    (
        "NO_DATA",
        &[
            ("zh-CN", "暂无数据"),
            ("ja-JP", "データがありません"),
            ("en-US", "No data"),
        ],
    ),
    (
        "NO_DATA_DETAILS",
        &[
            ("zh-CN", "没有找到费用记录"),
            ("ja-JP", "費用記録が見つかりません"),
            ("en-US", "No expense records were found"),
        ],
    ),
    (
        "ALL_EXPENSES_NAV",
        &[
            ("zh-CN", "全部费用"),
            ("ja-JP", "全費用"),
            ("en-US", "All Expenses"),
        ],
    ),
    (
        "MONTHLY_EXPENSES_NAV",
        &[
            ("zh-CN", "月度费用"),
            ("ja-JP", "月次費用"),
            ("en-US", "Monthly Expenses"),
        ],
    ),
];
