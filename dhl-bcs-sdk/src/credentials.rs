/// Access data for the business customer gateway. Pure data; a SOAP
/// transport combines it with the request nodes built by the models.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    /// Business customer portal user name.
    pub user: String,
    /// Portal password, called signature by DHL.
    pub signature: String,
    /// 10 digit DHL customer number (EKP).
    pub ekp: String,
    /// Application ID from the developer portal.
    pub api_user: String,
    /// Application token from the developer portal.
    pub api_password: String,
    /// Talk to the sandbox gateway instead of production.
    pub sandbox: bool,
}

impl Credentials {
    /// Production gateway endpoint.
    pub const PRODUCTION_GATEWAY: &'static str = "https://cig.dhl.de/services/production/soap";
    /// Sandbox gateway endpoint.
    pub const SANDBOX_GATEWAY: &'static str = "https://cig.dhl.de/services/sandbox/soap";

    /// Credentials preset with DHL's published sandbox user.
    pub fn sandbox(api_user: String, api_password: String) -> Self {
        Self {
            user: "2222222222_01".to_string(),
            signature: "pass".to_string(),
            ekp: "2222222222".to_string(),
            api_user,
            api_password,
            sandbox: true,
        }
    }

    /// The gateway endpoint this set of credentials belongs to.
    pub fn gateway_url(&self) -> &'static str {
        if self.sandbox {
            Self::SANDBOX_GATEWAY
        } else {
            Self::PRODUCTION_GATEWAY
        }
    }

    /// Builds the 14 character account number shipments are billed to, e.g.
    /// procedure `01` and participation `01` yield `22222222220101` for the
    /// sandbox EKP.
    pub fn account_number(&self, procedure: &str, participation: &str) -> String {
        format!("{}{procedure}{participation}", self.ekp)
    }
}
