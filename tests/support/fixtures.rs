/// Builds a Cobertura report with one `package` per `(name, line-rate)` pair.
#[allow(dead_code)]
pub fn cobertura(packages: &[(&str, &str)]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" ?>\n\
         <!DOCTYPE coverage SYSTEM \"http://cobertura.sourceforge.net/xml/coverage-04.dtd\">\n\
         <coverage line-rate=\"0\" branch-rate=\"0\" version=\"1.9\">\n  <packages>\n",
    );
    for (name, rate) in packages {
        xml.push_str(&format!(
            "    <package name=\"{}\" line-rate=\"{}\" branch-rate=\"0\" complexity=\"1\">\n      <classes/>\n    </package>\n",
            name, rate
        ));
    }
    xml.push_str("  </packages>\n</coverage>\n");
    xml
}
