// ==========================================
// CatalogApi 集成测试
// ==========================================
// 测试目标: 服务目录查询 / 报价计算 (各紧急程度与区域倍率) / 联系表单 / 客户评价
// ==========================================

use chrono::NaiveDate;
use elektrik_backend::api::{ApiError, CatalogApi};
use elektrik_backend::config::{AppConfig, PricingProfile};
use elektrik_backend::domain::{ContactRequest, DistrictZone, QuoteRequest, UrgencyLevel};

fn api() -> CatalogApi {
    CatalogApi::new(PricingProfile::default(), "en")
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
}

fn request(service_id: &str, district: &str, urgency: UrgencyLevel) -> QuoteRequest {
    QuoteRequest {
        service_id: service_id.to_string(),
        district: district.to_string(),
        urgency,
    }
}

#[test]
fn test_list_services() {
    let services = api().list_services();
    let ids: Vec<&str> = services.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["tesisat", "proje", "bakim", "ariza", "danismanlik", "guvenlik"]
    );
    assert!(services.iter().all(|s| !s.features.is_empty()));
}

#[test]
fn test_get_service() {
    let service = api().get_service("proje").unwrap();
    assert_eq!(service.base_price, 3000.0);
    assert!(matches!(api().get_service("nope"), Err(ApiError::NotFound(_))));
}

#[test]
fn test_services_by_category() {
    let services = api().services_by_category("guvenlik");
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].id, "guvenlik");
}

#[test]
fn test_services_by_unknown_category_is_empty() {
    assert!(api().services_by_category("boya").is_empty());
    assert!(api().services_by_category("").is_empty());
}

#[test]
fn test_quote_central_normal() {
    let response = api()
        .quote(&request("tesisat", "Kadıköy", UrgencyLevel::Normal), today())
        .unwrap();
    let quote = &response.quote;

    // 2500 + 1000 + 750
    assert_eq!(quote.total_price, 4250.0);
    assert_eq!(quote.district_zone, DistrictZone::Central);
    assert_eq!(quote.valid_until, NaiveDate::from_ymd_opt(2026, 10, 22).unwrap());
    assert!(response.quote_code.starts_with("QT-261015-"));
}

#[test]
fn test_quote_standard_urgent() {
    let response = api()
        .quote(&request("proje", "Pendik", UrgencyLevel::Urgent), today())
        .unwrap();

    // (3000 + 1000 + 900) × 1.5 × 1.2 = 8820
    assert_eq!(response.quote.distance_multiplier, 1.2);
    assert_eq!(response.quote.urgency_multiplier, 1.5);
    assert_eq!(response.quote.total_price, 8820.0);
}

#[test]
fn test_quote_far_emergency() {
    let response = api()
        .quote(&request("danismanlik", "Silivri", UrgencyLevel::Emergency), today())
        .unwrap();

    // (1500 + 1000 + 450) × 2.0 × 1.5 = 8850
    assert_eq!(response.quote.total_price, 8850.0);
    assert_eq!(response.quote.district_zone, DistrictZone::Far);
}

#[test]
fn test_quote_uses_configured_pricing() {
    let mut config = AppConfig::default();
    config.base_labor_rate = 750.0;
    config.urgent_multiplier = 1.25;
    config.currency = "EUR".to_string();
    config.quote_validity_days = 30;

    let api = CatalogApi::from_config(&config);
    let response = api
        .quote(&request("bakim", "Beşiktaş", UrgencyLevel::Urgent), today())
        .unwrap();

    // (800 + 1500 + 240) × 1.25 = 3175
    assert_eq!(response.quote.total_price, 3175.0);
    assert_eq!(response.quote.currency, "EUR");
    assert_eq!(response.quote.valid_until, NaiveDate::from_ymd_opt(2026, 11, 14).unwrap());
}

#[test]
fn test_quote_unknown_service() {
    let err = api()
        .quote(&request("boya", "Kadıköy", UrgencyLevel::Normal), today())
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[test]
fn test_quote_not_found_message_localized() {
    let api = CatalogApi::new(PricingProfile::default(), "tr");
    match api.get_service("boya") {
        Err(ApiError::NotFound(msg)) => assert_eq!(msg, "service bulunamadı: boya"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_quote_response_serializes_flat() {
    let response = api()
        .quote(&request("ariza", "Fatih", UrgencyLevel::Normal), today())
        .unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert!(json["quote_code"].is_string());
    assert_eq!(json["service_id"], "ariza");
    assert_eq!(json["district_zone"], "central");
    assert_eq!(json["valid_until"], "2026-10-22");
}

#[test]
fn test_quote_codes_are_unique() {
    let a = api().quote(&request("ariza", "Fatih", UrgencyLevel::Normal), today()).unwrap();
    let b = api().quote(&request("ariza", "Fatih", UrgencyLevel::Normal), today()).unwrap();
    assert_ne!(a.quote_code, b.quote_code);
    assert_eq!(a.quote, b.quote);
}

// ── 联系表单 ───────────────────────────────────────────

fn contact() -> ContactRequest {
    ContactRequest {
        name: "Ayşe Kara".to_string(),
        email: "ayse@example.com".to_string(),
        phone: "+90 555 000 00 00".to_string(),
        subject: "Pano bakımı".to_string(),
        message: "Ofisimiz için periyodik bakım teklifi rica ediyoruz.".to_string(),
    }
}

#[test]
fn test_submit_contact_acknowledged() {
    let response = api().submit_contact(&contact()).unwrap();
    assert!(response.success);
    assert_eq!(
        response.message,
        "Your message has been sent successfully. We will get back to you as soon as possible."
    );
}

#[test]
fn test_submit_contact_localized() {
    let api = CatalogApi::new(PricingProfile::default(), "tr");
    let response = api.submit_contact(&contact()).unwrap();
    assert_eq!(
        response.message,
        "Mesajınız başarıyla gönderildi. En kısa sürede size dönüş yapacağız."
    );
}

#[test]
fn test_submit_contact_reports_every_violation() {
    let request = ContactRequest {
        name: "Al".to_string(),
        email: " ".to_string(),
        phone: "".to_string(),
        subject: "x".repeat(201),
        message: "kısa".to_string(),
    };

    let err = api().submit_contact(&request).unwrap_err();
    assert!(matches!(err, ApiError::ValidationFailed { .. }));
    let fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "email", "phone", "subject", "message"]);
    assert_eq!(err.violations()[0].details.as_ref().unwrap()["length"], 2);
}

#[test]
fn test_submit_contact_length_counts_characters() {
    // 3 个字符 (6 字节) 的姓名, 10 个字符的消息, 均在边界上
    let mut request = contact();
    request.name = "Çağ".to_string();
    request.message = "ğüşıöçĞÜŞİ".to_string();
    assert!(api().submit_contact(&request).is_ok());

    request.message = "x".repeat(2001);
    let err = api().submit_contact(&request).unwrap_err();
    assert_eq!(err.violations()[0].field, "message");
}

#[test]
fn test_contact_request_from_json() {
    let json = r#"{
        "name": "Mehmet", "email": "m@example.com", "phone": "0212",
        "subject": "Arıza", "message": "Sigorta sürekli atıyor, yardım lütfen."
    }"#;
    let request: ContactRequest = serde_json::from_str(json).unwrap();
    assert!(api().submit_contact(&request).is_ok());
}

// ── 客户评价 ───────────────────────────────────────────

#[test]
fn test_list_testimonials() {
    let testimonials = api().list_testimonials();
    assert_eq!(testimonials.len(), 3);
    assert!(testimonials.iter().all(|t| (1..=5).contains(&t.rating)));
    assert_eq!(testimonials[0].customer_name, "Ahmet Yılmaz");
    assert_eq!(testimonials[2].date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());

    let json = serde_json::to_value(&testimonials[1]).unwrap();
    assert_eq!(json["service_type"], "Acil Arıza Müdahale");
    assert_eq!(json["date"], "2024-02-20");
    assert!(json.get("avatar").is_none());
}
