use super::*;

#[derive(Copy, Clone, Debug, Eq, IntoStaticStr, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
  Title,
  Description,
  People,
}

impl Display for Field {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(<&str>::from(self))
  }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UserInput {
  pub title: String,
  pub description: String,
  pub people: u32,
}

impl UserInput {
  pub const ALERT: &'static str = "Please check inputs";
  pub const DESCRIPTION_MIN_LENGTH: usize = 5;
  pub const PEOPLE: RangeInclusive<u32> = 1..=5;
  pub const TITLE_MIN_LENGTH: usize = 5;

  /// Validates raw form values, returning the first invalid field.
  pub fn gather(title: &str, description: &str, people: &str) -> Result<Self, Error> {
    ensure!(
      validate(
        &Validatable::new(title)
          .required()
          .min_length(Self::TITLE_MIN_LENGTH)
      ),
      error::InvalidInput {
        field: Field::Title
      }
    );

    ensure!(
      validate(
        &Validatable::new(description)
          .required()
          .min_length(Self::DESCRIPTION_MIN_LENGTH)
      ),
      error::InvalidInput {
        field: Field::Description
      }
    );

    let count = people.trim().parse::<f64>().ok().filter(|count| {
      validate(&Validatable::new(*count).required().range(
        f64::from(*Self::PEOPLE.start())..=f64::from(*Self::PEOPLE.end()),
      ))
    });

    let count = count.context(error::InvalidInput {
      field: Field::People,
    })?;

    ensure!(
      count.fract() == 0.0,
      error::InvalidInput {
        field: Field::People
      }
    );

    Ok(Self {
      title: title.into(),
      description: description.into(),
      people: count as u32,
    })
  }
}
