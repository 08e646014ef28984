//! 応答の表示内容導出
//!
//! フィルタ選択と応答から表示行を導出する。表示順は選択した順ではなく
//! [`FilterOption::ALL`] の固定順に揃える

use crate::types::BfhlResponse;

/// 表示フィルタ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOption {
    Numbers,
    Alphabets,
    HighestLowercaseAlphabet,
}

impl FilterOption {
    /// 固定の表示順。フィルタ行は必ずこの並びで出力する
    pub const ALL: [FilterOption; 3] = [
        FilterOption::Numbers,
        FilterOption::Alphabets,
        FilterOption::HighestLowercaseAlphabet,
    ];

    /// 表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            FilterOption::Numbers => "Numbers",
            FilterOption::Alphabets => "Alphabets",
            FilterOption::HighestLowercaseAlphabet => "Highest Lowercase Alphabet",
        }
    }

    /// 対応する応答フィールドの値
    fn values<'a>(&self, response: &'a BfhlResponse) -> &'a [String] {
        match self {
            FilterOption::Numbers => &response.numbers,
            FilterOption::Alphabets => &response.alphabets,
            FilterOption::HighestLowercaseAlphabet => &response.highest_lowercase_alphabet,
        }
    }
}

impl std::str::FromStr for FilterOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "numbers" => Ok(FilterOption::Numbers),
            "alphabets" => Ok(FilterOption::Alphabets),
            "highest-lowercase-alphabet" | "highest-lowercase" => {
                Ok(FilterOption::HighestLowercaseAlphabet)
            }
            _ => Err(format!(
                "不明なフィルタ: {} (numbers, alphabets, highest-lowercase-alphabet)",
                s
            )),
        }
    }
}

impl std::fmt::Display for FilterOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterOption::Numbers => write!(f, "numbers"),
            FilterOption::Alphabets => write!(f, "alphabets"),
            FilterOption::HighestLowercaseAlphabet => write!(f, "highest-lowercase-alphabet"),
        }
    }
}

/// 画像詳細ブロック
///
/// 応答に `file_path` があるときだけ描画される。
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDetails {
    pub path: String,
    /// 未加工のサイズ値。応答になければ行ごと出さない
    pub size_kb: Option<serde_json::Number>,
}

/// 選択されたフィルタに対応する表示行を導出
///
/// [`FilterOption::ALL`] の順に走査し、選択中のものだけ
/// `"ラベル: 値, 値"` 形式の1行にする。選択が空なら空のまま返す。
///
/// # Arguments
/// * `response` - デコード済みのサーバ応答
/// * `selected` - 選択中のフィルタ（順序は結果に影響しない）
pub fn filtered_lines(response: &BfhlResponse, selected: &[FilterOption]) -> Vec<String> {
    FilterOption::ALL
        .iter()
        .filter(|option| selected.contains(option))
        .map(|option| {
            format!(
                "{}: {}",
                option.label(),
                option.values(response).join(", ")
            )
        })
        .collect()
}

/// 画像詳細を導出
///
/// `file_path` が空でないときだけ Some。フィルタ選択とは独立に表示される。
pub fn image_details(response: &BfhlResponse) -> Option<ImageDetails> {
    let path = response.file_path.as_deref().filter(|path| !path.is_empty())?;
    Some(ImageDetails {
        path: path.to_string(),
        size_kb: response.file_size_kb.clone(),
    })
}

/// 応答ボディを整形
///
/// JSONとして解釈できればインデント付きで整形し、
/// できなければ原文をそのまま返す。
pub fn pretty_json(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> BfhlResponse {
        BfhlResponse {
            numbers: vec!["1".to_string(), "2".to_string()],
            alphabets: vec!["a".to_string(), "z".to_string()],
            highest_lowercase_alphabet: vec!["z".to_string()],
            file_path: None,
            file_size_kb: None,
        }
    }

    // =============================================
    // FilterOption テスト
    // =============================================

    #[test]
    fn test_filter_labels() {
        assert_eq!(FilterOption::Numbers.label(), "Numbers");
        assert_eq!(FilterOption::Alphabets.label(), "Alphabets");
        assert_eq!(
            FilterOption::HighestLowercaseAlphabet.label(),
            "Highest Lowercase Alphabet"
        );
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("numbers".parse::<FilterOption>(), Ok(FilterOption::Numbers));
        assert_eq!(
            "Alphabets".parse::<FilterOption>(),
            Ok(FilterOption::Alphabets)
        );
        assert_eq!(
            "highest-lowercase-alphabet".parse::<FilterOption>(),
            Ok(FilterOption::HighestLowercaseAlphabet)
        );
        assert_eq!(
            "highest_lowercase_alphabet".parse::<FilterOption>(),
            Ok(FilterOption::HighestLowercaseAlphabet)
        );
        assert!("vowels".parse::<FilterOption>().is_err());
    }

    #[test]
    fn test_filter_display_roundtrip() {
        for option in FilterOption::ALL {
            let token = option.to_string();
            assert_eq!(token.parse::<FilterOption>(), Ok(option));
        }
    }

    // =============================================
    // filtered_lines テスト
    // =============================================

    #[test]
    fn test_single_filter() {
        let lines = filtered_lines(&sample_response(), &[FilterOption::Numbers]);
        assert_eq!(lines, vec!["Numbers: 1, 2"]);
    }

    #[test]
    fn test_selection_order_does_not_matter() {
        let response = sample_response();
        let lines = filtered_lines(
            &response,
            &[FilterOption::HighestLowercaseAlphabet, FilterOption::Numbers],
        );
        // 選択順が逆でも表示はALLの固定順
        assert_eq!(lines, vec!["Numbers: 1, 2", "Highest Lowercase Alphabet: z"]);
    }

    #[test]
    fn test_all_filters() {
        let lines = filtered_lines(&sample_response(), &FilterOption::ALL);
        assert_eq!(
            lines,
            vec![
                "Numbers: 1, 2",
                "Alphabets: a, z",
                "Highest Lowercase Alphabet: z"
            ]
        );
    }

    #[test]
    fn test_no_filters_selected() {
        let lines = filtered_lines(&sample_response(), &[]);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_empty_field_renders_empty_line() {
        let response = BfhlResponse::default();
        let lines = filtered_lines(&response, &[FilterOption::Alphabets]);
        assert_eq!(lines, vec!["Alphabets: "]);
    }

    #[test]
    fn test_duplicate_selection_renders_once() {
        let lines = filtered_lines(
            &sample_response(),
            &[FilterOption::Numbers, FilterOption::Numbers],
        );
        assert_eq!(lines, vec!["Numbers: 1, 2"]);
    }

    // =============================================
    // image_details テスト
    // =============================================

    #[test]
    fn test_image_details_absent() {
        assert!(image_details(&sample_response()).is_none());
    }

    #[test]
    fn test_image_details_empty_path_treated_as_absent() {
        let mut response = sample_response();
        response.file_path = Some(String::new());
        assert!(image_details(&response).is_none());
    }

    #[test]
    fn test_image_details_with_size() {
        let mut response = sample_response();
        response.file_path = Some("/uploads/x.png".to_string());
        response.file_size_kb = serde_json::from_str("12.5").ok();

        let details = image_details(&response).expect("詳細が出るはず");
        assert_eq!(details.path, "/uploads/x.png");
        assert_eq!(details.size_kb.map(|n| n.to_string()), Some("12.5".to_string()));
    }

    #[test]
    fn test_image_details_without_size() {
        let mut response = sample_response();
        response.file_path = Some("/uploads/x.png".to_string());

        let details = image_details(&response).expect("詳細が出るはず");
        assert!(details.size_kb.is_none());
    }

    // =============================================
    // pretty_json テスト
    // =============================================

    #[test]
    fn test_pretty_json_indents() {
        let pretty = pretty_json(r#"{"numbers":["1"]}"#);
        assert!(pretty.contains("\n"));
        assert!(pretty.contains("\"numbers\""));
    }

    #[test]
    fn test_pretty_json_passes_through_non_json() {
        assert_eq!(pretty_json("not json"), "not json");
    }
}
