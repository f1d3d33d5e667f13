use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// https://docs.aws.amazon.com/general/latest/gr/rande.html#regional-endpoints
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Region {
    // Africa (Cape Town)           af-south-1
    AfSouth1,

    // Asia Pacific (Hong Kong)     ap-east-1
    ApEast1,

    // Asia Pacific (Tokyo)         ap-northeast-1
    ApNortheast1,

    // Asia Pacific (Seoul)         ap-northeast-2
    ApNortheast2,

    // Asia Pacific (Osaka)         ap-northeast-3
    ApNortheast3,

    // Asia Pacific (Mumbai)        ap-south-1
    ApSouth1,

    // Asia Pacific (Singapore)     ap-southeast-1
    ApSoutheast1,

    // Asia Pacific (Sydney)        ap-southeast-2
    ApSoutheast2,

    // Canada (Central)             ca-central-1
    CaCentral1,

    // Europe (Frankfurt)           eu-central-1
    EuCentral1,

    // Europe (Zurich)              eu-central-2
    EuCentral2,

    // Europe (Stockholm)           eu-north-1
    EuNorth1,

    // Europe (Milan)               eu-south-1
    EuSouth1,

    // Europe (Spain)               eu-south-2
    EuSouth2,

    // Europe (Ireland)             eu-west-1
    EuWest1,

    // Europe (London)              eu-west-2, where state buckets go unless configured
    #[default]
    EuWest2,

    // Europe (Paris)               eu-west-3
    EuWest3,

    // Middle East (Bahrain)        me-south-1
    MeSouth1,

    // South America (São Paulo)    sa-east-1
    SaEast1,

    // US East (N. Virginia)        us-east-1
    UsEast1,

    // US East (Ohio)               us-east-2
    UsEast2,

    // US West (N. California)      us-west-1
    UsWest1,

    // US West (Oregon)             us-west-2
    UsWest2,

    // S3 compatible provider: signing region name and endpoint
    Custom { name: String, endpoint: String },
}

impl Region {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::AfSouth1 => "af-south-1",
            Self::ApEast1 => "ap-east-1",
            Self::ApNortheast1 => "ap-northeast-1",
            Self::ApNortheast2 => "ap-northeast-2",
            Self::ApNortheast3 => "ap-northeast-3",
            Self::ApSouth1 => "ap-south-1",
            Self::ApSoutheast1 => "ap-southeast-1",
            Self::ApSoutheast2 => "ap-southeast-2",
            Self::CaCentral1 => "ca-central-1",
            Self::EuCentral1 => "eu-central-1",
            Self::EuCentral2 => "eu-central-2",
            Self::EuNorth1 => "eu-north-1",
            Self::EuSouth1 => "eu-south-1",
            Self::EuSouth2 => "eu-south-2",
            Self::EuWest1 => "eu-west-1",
            Self::EuWest2 => "eu-west-2",
            Self::EuWest3 => "eu-west-3",
            Self::MeSouth1 => "me-south-1",
            Self::SaEast1 => "sa-east-1",
            Self::UsEast1 => "us-east-1",
            Self::UsEast2 => "us-east-2",
            Self::UsWest1 => "us-west-1",
            Self::UsWest2 => "us-west-2",
            Self::Custom { name, .. } => name,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        match self {
            Self::Custom { endpoint, .. } => endpoint.to_string(),
            _ => format!("s3.{}.amazonaws.com", self.name()),
        }
    }

    /// S3 rejects an explicit `us-east-1` location constraint, buckets there
    /// are created without a `CreateBucketConfiguration`.
    #[must_use]
    pub fn location_constraint(&self) -> Option<&str> {
        match self.name() {
            "" | "us-east-1" => None,
            name => Some(name),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "af-south-1" => Ok(Self::AfSouth1),
            "ap-east-1" => Ok(Self::ApEast1),
            "ap-northeast-1" => Ok(Self::ApNortheast1),
            "ap-northeast-2" => Ok(Self::ApNortheast2),
            "ap-northeast-3" => Ok(Self::ApNortheast3),
            "ap-south-1" => Ok(Self::ApSouth1),
            "ap-southeast-1" => Ok(Self::ApSoutheast1),
            "ap-southeast-2" => Ok(Self::ApSoutheast2),
            "ca-central-1" => Ok(Self::CaCentral1),
            "eu-central-1" => Ok(Self::EuCentral1),
            "eu-central-2" => Ok(Self::EuCentral2),
            "eu-north-1" => Ok(Self::EuNorth1),
            "eu-south-1" => Ok(Self::EuSouth1),
            "eu-south-2" => Ok(Self::EuSouth2),
            "eu-west-1" => Ok(Self::EuWest1),
            "eu-west-2" => Ok(Self::EuWest2),
            "eu-west-3" => Ok(Self::EuWest3),
            "me-south-1" => Ok(Self::MeSouth1),
            "sa-east-1" => Ok(Self::SaEast1),
            "us-east-1" => Ok(Self::UsEast1),
            "us-east-2" => Ok(Self::UsEast2),
            "us-west-1" => Ok(Self::UsWest1),
            "us-west-2" => Ok(Self::UsWest2),
            _ => Err(ParseRegionError {
                region: s.to_string(),
            }),
        }
    }
}

/// An error produced when attempting to convert a `str` into a `Region` fails.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("Not a valid AWS region: {region}")]
pub struct ParseRegionError {
    region: String,
}
