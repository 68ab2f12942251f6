use curlfetch::parse_curl;

fn main() {
    let curl_command = "curl 'http://example.com' -H 'Accept: application/json' -b 'sid=1' -L";
    let parsed = parse_curl(curl_command);
    println!("{:?}", parsed.descriptor);
    println!("{}", parsed.sample_code);
}
