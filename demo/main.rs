use avl_engine::{build_avl, AvlTree, BstTree, Snapshot, TreeObserver};

mod render;

const DEFAULT_INPUT: &str = "10,20,30,40,50,25";

///Parses a comma-separated key list, rejecting bad records before any of
///them reach the engine
fn parse_keys(input: &str) -> Result<Vec<i64>, String> {
    input
        .split(',')
        .map(|record| {
            record
                .trim()
                .parse::<i64>()
                .map_err(|err| format!("bad record {:?}: {}", record.trim(), err))
        })
        .collect()
}

struct StepPrinter;

impl TreeObserver<i64> for StepPrinter {
    fn on_insert(&mut self, step: usize, key: &i64, snapshot: &Snapshot<i64>) {
        println!("Step {}: insert {}", step, key);
        println!("{}", render::render(snapshot));
    }
}

fn main() {
    let input = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let keys = match parse_keys(&input) {
        Ok(keys) => keys,
        Err(message) => {
            eprintln!("invalid input: {}", message);
            eprintln!("expected a comma-separated list of integers, e.g. {:?}", DEFAULT_INPUT);
            std::process::exit(1);
        }
    };

    println!("Unbalanced binary search tree");
    let mut unbalanced = BstTree::new();
    for &key in &keys {
        unbalanced.insert(key);
    }
    println!("{}", render::render(&Snapshot::capture(unbalanced.root())));

    println!("Step-by-step AVL conversion");
    let balanced: AvlTree<i64> = build_avl(keys, &mut StepPrinter);

    println!(
        "Final in-order traversal: {}",
        balanced
            .in_order()
            .iter()
            .map(|key| key.to_string())
            .collect::<Vec<_>>()
            .join(",")
    );
}
