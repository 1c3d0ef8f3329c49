use super::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
  Text(String),
  Number(f64),
}

impl Display for Value {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Text(text) => f.write_str(text),
      Self::Number(number) => write!(f, "{number}"),
    }
  }
}

impl From<&str> for Value {
  fn from(text: &str) -> Self {
    Self::Text(text.into())
  }
}

impl From<f64> for Value {
  fn from(number: f64) -> Self {
    Self::Number(number)
  }
}

/// A form value and the constraints it must satisfy. Length bounds only
/// apply to text, range bounds only to numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct Validatable {
  pub value: Value,
  pub required: bool,
  pub min_length: Option<usize>,
  pub max_length: Option<usize>,
  pub min: Option<f64>,
  pub max: Option<f64>,
}

impl Validatable {
  pub fn new(value: impl Into<Value>) -> Self {
    Self {
      value: value.into(),
      required: false,
      min_length: None,
      max_length: None,
      min: None,
      max: None,
    }
  }

  pub fn required(self) -> Self {
    Self {
      required: true,
      ..self
    }
  }

  pub fn length(self, range: RangeInclusive<usize>) -> Self {
    Self {
      min_length: Some(*range.start()),
      max_length: Some(*range.end()),
      ..self
    }
  }

  pub fn min_length(self, min_length: usize) -> Self {
    Self {
      min_length: Some(min_length),
      ..self
    }
  }

  pub fn range(self, range: RangeInclusive<f64>) -> Self {
    Self {
      min: Some(*range.start()),
      max: Some(*range.end()),
      ..self
    }
  }
}

pub fn validate(validatable: &Validatable) -> bool {
  let mut valid = true;

  if validatable.required {
    valid &= !validatable.value.to_string().trim().is_empty();
  }

  if let Value::Text(text) = &validatable.value {
    let length = text.chars().count();

    if let Some(min_length) = validatable.min_length {
      valid &= length >= min_length;
    }

    if let Some(max_length) = validatable.max_length {
      valid &= length <= max_length;
    }
  }

  if let Value::Number(number) = validatable.value {
    if let Some(min) = validatable.min {
      valid &= number >= min;
    }

    if let Some(max) = validatable.max {
      valid &= number <= max;
    }
  }

  valid
}
