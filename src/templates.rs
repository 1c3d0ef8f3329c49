use super::*;

#[derive(Boilerplate)]
pub(crate) struct IndexHtml {
  pub(crate) people: RangeInclusive<u32>,
  pub(crate) title: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn index() -> String {
    IndexHtml {
      people: UserInput::PEOPLE,
      title: "Projects".into(),
    }
    .to_string()
  }

  #[test]
  fn templates_and_host() {
    let html = index();

    for needle in [
      "<template id=project-input>",
      "<template id=project-list>",
      "<input type=text id=title>",
      "<textarea id=description rows=3></textarea>",
      "<div id=app></div>",
      "<script type=module src=/index.js></script>",
    ] {
      assert!(html.contains(needle), "missing {needle} in:\n{html}");
    }
  }

  #[test]
  fn people_bounds() {
    assert!(index().contains("<input type=number id=people step=1 min=1 max=5>"));
  }

  #[test]
  fn title_is_escaped() {
    let html = IndexHtml {
      people: UserInput::PEOPLE,
      title: "<Projects & Plans>".into(),
    }
    .to_string();

    assert!(html.contains("<title>&lt;Projects &amp; Plans&gt;</title>"));
  }
}
