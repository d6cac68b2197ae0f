// ==========================================
// 电气服务后台 - 服务目录与报价引擎
// ==========================================
// 职责: 静态服务目录 + 报价计算
// 公式: (基础价 + 人工 + 材料) × 紧急倍率 × 区域倍率
// 红线: 报价计算为纯函数, 签发日期由调用方传入
// ==========================================

use std::sync::OnceLock;

use chrono::{Duration, NaiveDate};

use crate::config::PricingProfile;
use crate::domain::service::{PriceQuote, ServiceOffering, Testimonial};
use crate::domain::types::{DistrictZone, ServiceCategory, UrgencyLevel};
use crate::engine::load_calc::round2;

/// 预估人工小时数
pub const ESTIMATED_LABOR_HOURS: f64 = 2.0;

/// 材料费占基础价比例
pub const MATERIALS_RATIO: f64 = 0.3;

/// 中心区
pub const CENTRAL_DISTRICTS: &[&str] = &[
    "Beşiktaş", "Şişli", "Kadıköy", "Üsküdar", "Fatih", "Beyoğlu", "Bakırköy", "Ataşehir",
];

/// 远郊区
pub const FAR_DISTRICTS: &[&str] = &[
    "Silivri", "Çatalca", "Şile", "Adalar", "Arnavutköy", "Büyükçekmece",
];

/// 行政区分级 (未列出的行政区视为普通区)
pub fn district_zone(district: &str) -> DistrictZone {
    let district = district.trim();
    if CENTRAL_DISTRICTS.contains(&district) {
        DistrictZone::Central
    } else if FAR_DISTRICTS.contains(&district) {
        DistrictZone::Far
    } else {
        DistrictZone::Standard
    }
}

// ==========================================
// 服务目录
// ==========================================

/// 目录条目的静态描述
struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: ServiceCategory,
    base_price: f64,
    estimated_duration: &'static str,
    icon: &'static str,
    features: &'static [&'static str],
}

impl From<CatalogEntry> for ServiceOffering {
    fn from(entry: CatalogEntry) -> Self {
        ServiceOffering {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            category: entry.category,
            base_price: entry.base_price,
            estimated_duration: entry.estimated_duration.to_string(),
            icon: entry.icon.to_string(),
            features: entry.features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// 服务目录 (进程内只读, 首次访问时构建)
pub fn service_catalog() -> &'static [ServiceOffering] {
    static CATALOG: OnceLock<Vec<ServiceOffering>> = OnceLock::new();

    CATALOG.get_or_init(|| {
        vec![
            CatalogEntry {
                id: "tesisat",
                name: "Elektrik Tesisatı",
                description: "Konut, işyeri ve endüstriyel tesislerde tam kapsamlı elektrik tesisat kurulumu ve yenileme hizmetleri.",
                category: ServiceCategory::Tesisat,
                base_price: 2500.0,
                estimated_duration: "2-5 gün",
                icon: "zap",
                features: &[
                    "Komple tesisat kurulumu",
                    "Eski tesisat yenileme",
                    "Elektrik panosu montajı",
                    "Kablo çekimi ve döşeme",
                    "Topraklama sistemi",
                    "Aydınlatma tesisatı",
                ],
            }
            .into(),
            CatalogEntry {
                id: "proje",
                name: "Proje Çizimi",
                description: "Mühendislik standartlarına uygun elektrik proje çizimi, hesaplamaları ve onay süreçleri.",
                category: ServiceCategory::Proje,
                base_price: 3000.0,
                estimated_duration: "3-7 gün",
                icon: "file-text",
                features: &[
                    "Tek hat şeması",
                    "Aydınlatma projesi",
                    "Kuvvet tesisatı projesi",
                    "Yük hesaplamaları",
                    "TEDAŞ onay takibi",
                ],
            }
            .into(),
            CatalogEntry {
                id: "bakim",
                name: "Periyodik Bakım",
                description: "Elektrik sistemlerinizin güvenli ve verimli çalışması için düzenli bakım ve kontrol hizmetleri.",
                category: ServiceCategory::Bakim,
                base_price: 800.0,
                estimated_duration: "2-4 saat",
                icon: "wrench",
                features: &[
                    "Termal görüntüleme",
                    "Yalıtım direnci ölçümü",
                    "Topraklama ölçümü",
                    "Pano bakımı",
                    "Rapor hazırlama",
                ],
            }
            .into(),
            CatalogEntry {
                id: "ariza",
                name: "Arıza Tespit ve Onarım",
                description: "7/24 acil arıza müdahale, profesyonel tespit ekipmanları ile hızlı ve kalıcı çözümler.",
                category: ServiceCategory::Ariza,
                base_price: 500.0,
                estimated_duration: "1-3 saat",
                icon: "alert-triangle",
                features: &[
                    "7/24 acil müdahale",
                    "Kaçak akım tespiti",
                    "Kısa devre onarımı",
                    "Hat arıza tespiti",
                ],
            }
            .into(),
            CatalogEntry {
                id: "danismanlik",
                name: "Teknik Danışmanlık",
                description: "Elektrik sistemleri, enerji verimliliği ve yatırım planlaması konularında uzman danışmanlık.",
                category: ServiceCategory::Danismanlik,
                base_price: 1500.0,
                estimated_duration: "1-2 gün",
                icon: "message-square",
                features: &[
                    "Enerji verimliliği analizi",
                    "Sistem optimizasyonu",
                    "Maliyet hesaplamaları",
                    "Fizibilite raporları",
                ],
            }
            .into(),
            CatalogEntry {
                id: "guvenlik",
                name: "Güvenlik Sistemleri",
                description: "Elektriksel güvenlik denetimleri, topraklama ölçümleri ve paratoner sistemleri kurulumu.",
                category: ServiceCategory::Guvenlik,
                base_price: 1200.0,
                estimated_duration: "4-8 saat",
                icon: "shield",
                features: &[
                    "Topraklama ölçümü",
                    "Paratoner kurulumu",
                    "Kaçak akım rölesi",
                    "Güvenlik denetimi",
                ],
            }
            .into(),
        ]
    })
}

/// 按 id 查找服务
pub fn find_service(service_id: &str) -> Option<&'static ServiceOffering> {
    let id = service_id.trim();
    service_catalog().iter().find(|s| s.id == id)
}

/// 按类别筛选服务
pub fn services_by_category(category: ServiceCategory) -> Vec<&'static ServiceOffering> {
    service_catalog()
        .iter()
        .filter(|s| s.category == category)
        .collect()
}

// ==========================================
// 客户评价
// ==========================================

/// 评分范围
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

struct TestimonialEntry {
    id: &'static str,
    customer_name: &'static str,
    customer_location: &'static str,
    rating: u8,
    comment: &'static str,
    service_type: &'static str,
    date: (i32, u32, u32),
}

/// 客户评价列表 (进程内只读)
pub fn testimonials() -> &'static [Testimonial] {
    static TESTIMONIALS: OnceLock<Vec<Testimonial>> = OnceLock::new();

    TESTIMONIALS.get_or_init(|| {
        [
            TestimonialEntry {
                id: "1",
                customer_name: "Ahmet Yılmaz",
                customer_location: "Kadıköy, İstanbul",
                rating: 5,
                comment: "Fabrikamızın elektrik altyapısını tamamen yenilediler. İsmail Bey'in mühendislik yaklaşımı ve detaycılığı gerçekten etkileyiciydi.",
                service_type: "Endüstriyel Tesisat",
                date: (2024, 1, 15),
            },
            TestimonialEntry {
                id: "2",
                customer_name: "Fatma Demir",
                customer_location: "Beşiktaş, İstanbul",
                rating: 5,
                comment: "Gece yarısı elektrik arızası yaşadık ve acil destek hattını aradık. 30 dakika içinde geldiler.",
                service_type: "Acil Arıza Müdahale",
                date: (2024, 2, 20),
            },
            TestimonialEntry {
                id: "3",
                customer_name: "Mehmet Kaya",
                customer_location: "Şişli, İstanbul",
                rating: 5,
                comment: "Yeni açtığımız mağaza için elektrik projesini hazırladılar. Her şey mükemmel hesaplanmış.",
                service_type: "Proje Çizimi",
                date: (2024, 3, 10),
            },
        ]
        .into_iter()
        .filter_map(|entry| {
            let (y, m, d) = entry.date;
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            RATING_RANGE.contains(&entry.rating).then(|| Testimonial {
                id: entry.id.to_string(),
                customer_name: entry.customer_name.to_string(),
                customer_location: entry.customer_location.to_string(),
                rating: entry.rating,
                comment: entry.comment.to_string(),
                service_type: entry.service_type.to_string(),
                date,
                avatar: None,
            })
        })
        .collect()
    })
}

// ==========================================
// PricingEngine - 报价引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct PricingEngine {
    profile: PricingProfile,
}

impl PricingEngine {
    pub fn new(profile: PricingProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &PricingProfile {
        &self.profile
    }

    /// 紧急倍率
    pub fn urgency_multiplier(&self, urgency: UrgencyLevel) -> f64 {
        match urgency {
            UrgencyLevel::Normal => 1.0,
            UrgencyLevel::Urgent => self.profile.urgent_multiplier,
            UrgencyLevel::Emergency => self.profile.emergency_multiplier,
        }
    }

    /// 计算报价
    ///
    /// # 参数
    /// - `service`: 服务目录条目
    /// - `district`: 行政区
    /// - `urgency`: 紧急程度
    /// - `issued_on`: 签发日期 (有效期由此推算)
    pub fn quote(
        &self,
        service: &ServiceOffering,
        district: &str,
        urgency: UrgencyLevel,
        issued_on: NaiveDate,
    ) -> PriceQuote {
        let zone = district_zone(district);
        let urgency_multiplier = self.urgency_multiplier(urgency);
        let distance_multiplier = zone.multiplier();

        let base_price = service.base_price;
        let labor_cost = self.profile.base_labor_rate * ESTIMATED_LABOR_HOURS;
        let materials_cost = base_price * MATERIALS_RATIO;

        let subtotal = base_price + labor_cost + materials_cost;
        let total = subtotal * urgency_multiplier * distance_multiplier;

        PriceQuote {
            service_id: service.id.clone(),
            base_price,
            labor_cost,
            materials_cost,
            urgency_multiplier,
            distance_multiplier,
            district_zone: zone,
            total_price: round2(total),
            currency: self.profile.currency.clone(),
            valid_until: issued_on + Duration::days(self.profile.quote_validity_days as i64),
        }
    }
}
