/// Implements `FromStr` from a YAML document. The type must provide a `validate()` method
/// returning an `AppResult<()>`, called once deserialized.
#[macro_export]
macro_rules! fromstr {
    ($t:ty) => {
        impl std::str::FromStr for $t {
            type Err = $crate::misc::error::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: $t = serde_yaml::from_str(s)?;
                value.validate()?;
                Ok(value)
            }
        }
    };
}
