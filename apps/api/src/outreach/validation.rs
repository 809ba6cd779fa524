//! Submission precondition: company and contact names must be non-empty after trimming.

use crate::outreach::generator::GenerationError;
use crate::outreach::models::ContactRequest;

pub fn validate_contact(request: &ContactRequest) -> Result<(), GenerationError> {
    let mut missing = Vec::new();
    if request.company_name.trim().is_empty() {
        missing.push("公司名称");
    }
    if request.contact_name.trim().is_empty() {
        missing.push("联系人");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(GenerationError::InvalidInput(format!(
            "{}不能为空",
            missing.join("和")
        )))
    }
}
