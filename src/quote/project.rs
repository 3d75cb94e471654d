//! Project metadata attached to a quote.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which fire-protection subsystem the quote covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum SystemArea {
    /// Full system: detection, water, and pumps
    #[default]
    Integral,
    Detection,
    Water,
    Pumps,
}

impl SystemArea {
    pub const ALL: [SystemArea; 4] = [
        SystemArea::Integral,
        SystemArea::Detection,
        SystemArea::Water,
        SystemArea::Pumps,
    ];
}

impl std::fmt::Display for SystemArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemArea::Integral => write!(f, "Integral"),
            SystemArea::Detection => write!(f, "Detection"),
            SystemArea::Water => write!(f, "Water"),
            SystemArea::Pumps => write!(f, "Pumps"),
        }
    }
}

impl std::str::FromStr for SystemArea {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "integral" => Ok(SystemArea::Integral),
            "detection" => Ok(SystemArea::Detection),
            "water" => Ok(SystemArea::Water),
            "pumps" => Ok(SystemArea::Pumps),
            _ => Err(format!(
                "Invalid system area: {}. Use integral, detection, water, or pumps",
                s
            )),
        }
    }
}

/// The kind of service being quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ServiceType {
    #[default]
    Corrective,
    Preventive,
    Installation,
}

impl ServiceType {
    pub const ALL: [ServiceType; 3] = [
        ServiceType::Corrective,
        ServiceType::Preventive,
        ServiceType::Installation,
    ];
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceType::Corrective => write!(f, "Corrective"),
            ServiceType::Preventive => write!(f, "Preventive"),
            ServiceType::Installation => write!(f, "Installation"),
        }
    }
}

impl std::str::FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "corrective" => Ok(ServiceType::Corrective),
            "preventive" => Ok(ServiceType::Preventive),
            "installation" => Ok(ServiceType::Installation),
            _ => Err(format!(
                "Invalid service type: {}. Use corrective, preventive, or installation",
                s
            )),
        }
    }
}

/// Client and job details shown on every export surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub client: String,
    /// Dial-ready number used to pre-fill the WhatsApp share link
    pub contact_phone: String,
    pub date: NaiveDate,
    pub area: SystemArea,
    pub service: ServiceType,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            client: "New Client".to_string(),
            contact_phone: String::new(),
            date: chrono::Local::now().date_naive(),
            area: SystemArea::default(),
            service: ServiceType::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_area_roundtrip() {
        for area in SystemArea::ALL {
            let parsed: SystemArea = area.to_string().parse().unwrap();
            assert_eq!(parsed, area);
        }
        assert!("sprinklers".parse::<SystemArea>().is_err());
    }

    #[test]
    fn test_service_type_roundtrip() {
        for service in ServiceType::ALL {
            let parsed: ServiceType = service.to_string().parse().unwrap();
            assert_eq!(parsed, service);
        }
        assert!("emergency".parse::<ServiceType>().is_err());
    }

    #[test]
    fn test_defaults() {
        let info = ProjectInfo::default();
        assert_eq!(info.client, "New Client");
        assert_eq!(info.area, SystemArea::Integral);
        assert_eq!(info.service, ServiceType::Corrective);
    }
}
