use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// The one pagination policy for every list endpoint: absent fields default
/// to page 1 / size 10, explicit values below 1 fail validation. Offsets are
/// 1-indexed pages. No upper bound on `page_size` is enforced.
#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct PageRequest {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: i32,

    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, message = "page_size must be at least 1"))]
    pub page_size: i32,
}

impl PageRequest {
    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }

    pub fn offset(&self) -> i64 {
        ((self.page - 1) as i64) * (self.page_size as i64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_zero_offset() {
        let req = PageRequest {
            page: 1,
            page_size: 10,
        };
        assert_eq!(req.offset(), 0);
        assert_eq!(req.limit(), 10);
    }

    #[test]
    fn offset_is_one_indexed() {
        let req = PageRequest {
            page: 3,
            page_size: 25,
        };
        assert_eq!(req.offset(), 50);
    }

    #[test]
    fn zero_page_fails_validation() {
        let req = PageRequest {
            page: 0,
            page_size: 10,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn zero_page_size_fails_validation() {
        let req = PageRequest {
            page: 1,
            page_size: 0,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn absent_fields_default_to_first_page() {
        let req: PageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, 10);
        assert!(req.validate().is_ok());
    }
}
