// ==========================================
// 电气服务后台 - 服务目录 / 报价 API
// ==========================================
// 职责: 服务目录查询, 报价生成 (含报价单号)
// ==========================================

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::LoadRequestValidator;
use crate::config::{AppConfig, PricingProfile};
use crate::domain::service::{
    ContactRequest, ContactResponse, QuoteRequest, QuoteResponse, ServiceOffering, Testimonial,
};
use crate::domain::types::ServiceCategory;
use crate::engine::pricing::{self, PricingEngine};
use crate::i18n::{t_in, t_with_args};
use crate::perf::PerfGuard;

/// 报价单号前缀
pub const QUOTE_CODE_PREFIX: &str = "QT";

/// 生成报价单号: QT-yymmdd-XXXXXX
pub fn generate_quote_code(issued_on: NaiveDate) -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(6)
        .collect();
    format!(
        "{}-{}-{}",
        QUOTE_CODE_PREFIX,
        issued_on.format("%y%m%d"),
        suffix.to_uppercase()
    )
}

// ==========================================
// CatalogApi - 服务目录 API
// ==========================================
pub struct CatalogApi {
    pricing: PricingEngine,
    validator: LoadRequestValidator,
    locale: String,
}

impl CatalogApi {
    pub fn new(profile: PricingProfile, locale: &str) -> Self {
        Self {
            pricing: PricingEngine::new(profile),
            validator: LoadRequestValidator::new(),
            locale: locale.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(PricingProfile::from(config), &config.locale)
    }

    /// 全部服务
    pub fn list_services(&self) -> Vec<ServiceOffering> {
        let services = pricing::service_catalog().to_vec();
        debug!(count = services.len(), "services listed");
        services
    }

    /// 按 id 查询服务
    ///
    /// # 返回
    /// - Err(ApiError::NotFound): 服务不存在
    pub fn get_service(&self, service_id: &str) -> ApiResult<ServiceOffering> {
        let service = pricing::find_service(service_id)
            .cloned()
            .ok_or_else(|| self.service_not_found(service_id))?;
        debug!(service_id = %service.id, "service fetched");
        Ok(service)
    }

    /// 按类别查询服务 (未知类别返回空列表)
    pub fn services_by_category(&self, category: &str) -> Vec<ServiceOffering> {
        let Ok(category) = category.trim().parse::<ServiceCategory>() else {
            debug!(category = %category, "unknown service category");
            return Vec::new();
        };

        pricing::services_by_category(category)
            .into_iter()
            .cloned()
            .collect()
    }

    /// 生成报价
    ///
    /// # 参数
    /// - request: 报价请求
    /// - today: 签发日期 (有效期由此推算)
    pub fn quote(&self, request: &QuoteRequest, today: NaiveDate) -> ApiResult<QuoteResponse> {
        let _perf = PerfGuard::new("quote");

        self.validator.validate_quote(request)?;

        let service = pricing::find_service(&request.service_id)
            .ok_or_else(|| self.service_not_found(&request.service_id))?;

        let quote = self
            .pricing
            .quote(service, &request.district, request.urgency, today);
        let quote_code = generate_quote_code(today);

        info!(
            quote_code = %quote_code,
            service_id = %quote.service_id,
            district_zone = %quote.district_zone,
            urgency = %request.urgency,
            total_price = quote.total_price,
            "quote issued"
        );

        Ok(QuoteResponse { quote_code, quote })
    }

    /// 客户评价列表
    pub fn list_testimonials(&self) -> Vec<Testimonial> {
        pricing::testimonials().to_vec()
    }

    /// 提交联系表单 (只校验并记录, 不落库不发信)
    ///
    /// # 返回
    /// - Ok(ContactResponse): 固定的本地化回执
    /// - Err(ApiError::ValidationFailed): 含全部违规明细
    pub fn submit_contact(&self, request: &ContactRequest) -> ApiResult<ContactResponse> {
        self.validator.validate_contact(request)?;

        info!(
            name = %request.name.trim(),
            email = %request.email.trim(),
            subject = %request.subject.trim(),
            "contact form submitted"
        );

        Ok(ContactResponse {
            success: true,
            message: t_in(&self.locale, "contact.received"),
        })
    }

    fn service_not_found(&self, service_id: &str) -> ApiError {
        ApiError::NotFound(t_with_args(
            &self.locale,
            "common.not_found",
            &[("entity", "service"), ("id", service_id.trim())],
        ))
    }
}
