pub const BLOCK_TEMPLATE: &str =
    "<div class=box><p>hello <b>bold</b> and <i>italic</i> words</p><img src=x><br></div>";

pub fn make_blocks(blocks: usize) -> String {
    let mut html = String::with_capacity(BLOCK_TEMPLATE.len() * blocks + 64);
    html.push_str("<!doctype html><title>blocks</title>");
    for _ in 0..blocks {
        html.push_str(BLOCK_TEMPLATE);
    }
    html
}
