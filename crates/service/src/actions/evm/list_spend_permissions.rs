//! List the spend permissions granted by a smart account

use tracing::debug;

use cdp_types::{Address, ApiResult, PageRequest, PlatformApi, SpendPermissionsPage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSpendPermissionsOptions {
	/// Smart account address
	pub address: Address,
	pub page_size: Option<u32>,
	pub page_token: Option<String>,
}

impl ListSpendPermissionsOptions {
	pub fn new(address: impl Into<Address>) -> Self {
		Self {
			address: address.into(),
			page_size: None,
			page_token: None,
		}
	}

	pub fn with_page(mut self, page_size: Option<u32>, page_token: Option<String>) -> Self {
		self.page_size = page_size;
		self.page_token = page_token;
		self
	}
}

/// Permissions are not network-scoped, so no capability check applies here
pub async fn list_spend_permissions(
	api: &dyn PlatformApi,
	options: &ListSpendPermissionsOptions,
) -> ApiResult<SpendPermissionsPage> {
	let page = PageRequest::new(options.page_size, options.page_token.clone());
	let response = api.list_spend_permissions(&options.address, &page).await?;

	debug!(
		"Listed {} spend permissions for {}",
		response.spend_permissions.len(),
		options.address
	);

	Ok(SpendPermissionsPage::try_from(response)?)
}
