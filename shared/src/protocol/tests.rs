use super::*;

// =========================================================
// Member payloads
// =========================================================

#[test]
fn user_info_accepts_both_nickname_casings() {
    let camel: UserInfo = serde_json::from_str(
        r#"{"email":"a@b.com","nickName":"드림이","stocks":["삼성전자"],"createdAt":"2024-01-02T00:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(camel.nick_name, "드림이");
    assert_eq!(camel.stocks, vec!["삼성전자"]);

    let lower: UserInfo =
        serde_json::from_str(r#"{"email":"a@b.com","nickname":"드림이","stocks":[]}"#).unwrap();
    assert_eq!(lower.nick_name, "드림이");
    assert_eq!(lower.created_at, None);
}

#[test]
fn register_request_serializes_camel_case() {
    let req = RegisterRequest {
        email: "a@b.com".into(),
        password: "pass".into(),
        confirm_password: "pass".into(),
        nick_name: "드림이".into(),
        stocks: vec!["카카오".into()],
    };
    let value = serde_json::to_value(&req).unwrap();
    assert!(value.get("confirmPassword").is_some());
    assert!(value.get("nickName").is_some());
    assert!(value.get("confirm_password").is_none());
}

#[test]
fn my_info_response_unwraps_data_envelope() {
    let res: MyInfoResponse =
        serde_json::from_str(r#"{"data":{"email":"a@b.com","nickName":"드림이"}}"#).unwrap();
    assert_eq!(res.data.email, "a@b.com");
    assert!(res.data.stocks.is_empty());
}

#[test]
fn api_message_tolerates_empty_bodies() {
    let msg: ApiMessage = serde_json::from_str("{}").unwrap();
    assert_eq!(msg.message, None);

    let msg: ApiMessage = serde_json::from_str(r#"{"message":"이미 존재하는 이메일입니다."}"#).unwrap();
    assert_eq!(msg.message.as_deref(), Some("이미 존재하는 이메일입니다."));
}

// =========================================================
// News payloads
// =========================================================

/// A realistic compound payload: camelCase event fields, snake_case
/// similar-news fields, one price window shared by two items.
const NEWS_FIXTURE: &str = r#"{
  "news": {
    "events": {
      "results": [
        {
          "uri": "evt-001",
          "title": { "eng": "Chipmaker beats earnings estimates", "kor": "실적 전망치 상회" },
          "summary": { "eng": "Quarterly profit rose sharply." },
          "eventDate": "2024-03-15T09:30:00Z",
          "sentiment": 0.43,
          "totalArticleCount": 127
        },
        {
          "uri": "evt-002",
          "title": { "eng": "Regulator opens antitrust probe" },
          "summary": { "eng": "Shares slid on the announcement." },
          "eventDate": "2024-03-14",
          "sentiment": -0.51,
          "totalArticleCount": 64
        }
      ],
      "totalResults": 38
    }
  },
  "similarNews": [
    {
      "items": [
        { "id": 9137, "title": "2019 earnings surprise", "summary": "...", "event_date": "2019-07-30", "distance": 1.5 },
        { "id": "uuid-22", "title": "2021 guidance raise", "summary": "...", "event_date": "2021-04-28", "distance": 2.8 }
      ],
      "top_price_window": [
        { "open": 50000, "high": 53000, "low": 49500, "close": 51500, "volume": 1203400 }
      ]
    }
  ]
}"#;

#[test]
fn compound_payload_deserializes_with_mixed_casing() {
    let data: NewsWithPastData = serde_json::from_str(NEWS_FIXTURE).unwrap();

    assert_eq!(data.results().len(), 2);
    assert_eq!(data.total_results(), 38);

    let first = &data.results()[0];
    assert_eq!(first.uri, "evt-001");
    assert_eq!(first.event_date, "2024-03-15T09:30:00Z");
    assert_eq!(first.sentiment, 0.43);
    assert_eq!(first.total_article_count, 127);

    let group = data.similar_group(0).unwrap();
    assert!(group.has_items());
    assert_eq!(group.items[1].event_date, "2021-04-28");
    assert_eq!(group.top_price_window.len(), 1);
    assert_eq!(group.top_price_window[0].close, 51500.0);
}

#[test]
fn similar_item_ids_normalize_to_strings() {
    let data: NewsWithPastData = serde_json::from_str(NEWS_FIXTURE).unwrap();
    let items = &data.similar_group(0).unwrap().items;
    assert_eq!(items[0].id.as_deref(), Some("9137"));
    assert_eq!(items[1].id.as_deref(), Some("uuid-22"));
}

#[test]
fn second_result_has_no_similar_group() {
    // Groups align by index; index 1 is simply absent here
    let data: NewsWithPastData = serde_json::from_str(NEWS_FIXTURE).unwrap();
    assert!(data.similar_group(1).is_none());
}

#[test]
fn empty_payload_flattens_to_empty_slices() {
    let data: NewsWithPastData = serde_json::from_str("{}").unwrap();
    assert!(data.results().is_empty());
    assert_eq!(data.total_results(), 0);
    assert!(data.similar_group(0).is_none());
}

#[test]
fn missing_inner_levels_are_defaulted() {
    let data: NewsWithPastData =
        serde_json::from_str(r#"{"news":{},"similarNews":[{"items":[]}]}"#).unwrap();
    assert!(data.results().is_empty());
    let group = data.similar_group(0).unwrap();
    assert!(!group.has_items());
    assert!(group.top_price_window.is_empty());
}

#[test]
fn localized_text_prefers_english() {
    let text = LocalizedText {
        eng: "Earnings beat".into(),
        kor: Some("실적 상회".into()),
    };
    assert_eq!(text.display(), "Earnings beat");

    let kor_only = LocalizedText {
        eng: String::new(),
        kor: Some("실적 상회".into()),
    };
    assert_eq!(kor_only.display(), "실적 상회");
}
