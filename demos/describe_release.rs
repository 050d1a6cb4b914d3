use release_parser::Release;

const RELEASES: &[&str] = &[
    "@foo.bar.baz--blah@1.2.3-dev+BUILD-code",
    "my-app@2.0.1-rc.1+5a2c0e7d9b3f",
    "package@1.0.0+deadbeefdeadbeefdeadbeefdeadbeef",
    "085240e737828d8326719bf97730188e927e49ca",
    "backend@01.02.0003.4",
    "1.0a1",
    "1a1",
    "nightly",
    "latest",
    "web/frontend@1.0",
];

fn main() {
    for input in RELEASES {
        println!("=== {input} ===");
        let release = match Release::parse(input) {
            Ok(release) => release,
            Err(err) => {
                println!("Rejected:     {} ({err})\n", err.code());
                continue;
            }
        };

        println!("Package:      {}", release.package().unwrap_or("-"));
        println!("Version:      {}", release.version_raw());
        println!("Format:       {}", release.format());
        if let Some(v) = release.version() {
            let (major, minor, patch, revision) = v.raw_quad();
            println!(
                "Components:   {} [{} {} {} {}]",
                v.components(),
                major,
                minor.unwrap_or("-"),
                patch.unwrap_or("-"),
                revision.unwrap_or("-")
            );
            println!(
                "Numbers:      {}.{}.{}.{}",
                v.major(),
                v.minor(),
                v.patch(),
                v.revision()
            );
            if let Some(pre) = v.pre() {
                println!("Pre-release:  {pre}");
            }
            if let Some(code) = v.build_code() {
                println!("Build:        {code}");
            }
        }
        if let Some(hash) = release.build_hash() {
            println!("Build hash:   {hash}");
        }
        println!("Description:  {}\n", release.describe());
    }
}
