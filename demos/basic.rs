use std::time::Instant;

use sklist::SkipMap;

fn main() {
  let begin = Instant::now();
  let mut l: SkipMap<u32, u32> = SkipMap::new();

  for i in 0..10 {
    match l.get(&i) {
      Some(v) => println!("get {v}"),
      None => println!("can not find {i}"),
    }
  }

  for i in 0..1_000_000 {
    l.insert(i, i).unwrap();
  }

  l.remove(&55);

  for i in (50..=59).rev() {
    match l.get(&i) {
      Some(v) => println!("get {v}"),
      None => println!("can not find {i}"),
    }
  }

  println!(
    "inserted {} entries, height {}, total used {} ms",
    l.len(),
    l.height(),
    begin.elapsed().as_millis()
  );
}
