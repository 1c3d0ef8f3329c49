use super::*;

#[derive(
  Copy, Clone, Debug, Deserialize, EnumString, Eq, IntoStaticStr, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProjectStatus {
  Active,
  Finished,
}

impl ProjectStatus {
  pub fn assigned(self, projects: &[Project]) -> Vec<Project> {
    projects
      .iter()
      .filter(|project| project.status == self)
      .cloned()
      .collect()
  }

  pub fn heading(self) -> String {
    format!("{} PROJECTS", self.to_string().to_uppercase())
  }
}

impl Display for ProjectStatus {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(<&str>::from(self))
  }
}

#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Id(u64);

impl From<u64> for Id {
  fn from(n: u64) -> Self {
    Self(n)
  }
}

impl Display for Id {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Project {
  pub id: Id,
  pub title: String,
  pub description: String,
  pub people: u32,
  pub status: ProjectStatus,
}

impl Project {
  pub fn new(id: Id, title: String, description: String, people: u32) -> Self {
    Self {
      id,
      title,
      description,
      people,
      status: ProjectStatus::Active,
    }
  }
}
