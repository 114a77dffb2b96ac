use scan_bitset::BitArray;

/// Marks every composite number below `limit`, leaving the primes clear.
fn sieve(limit: usize) -> BitArray {
    let mut composite = BitArray::new(limit);
    composite.set(0);
    if limit > 1 {
        composite.set(1);
    }
    let mut n = 2;
    while n * n < limit {
        if !composite.test(n) {
            for multiple in (n * n..limit).step_by(n) {
                composite.set(multiple);
            }
        }
        n += 1;
    }
    composite
}

fn main() {
    const LIMIT: usize = 100;
    let composite = sieve(LIMIT);

    let primes: Vec<usize> = (0..LIMIT).filter(|&n| !composite.test(n)).collect();
    println!("primes below {LIMIT}: {primes:?}");

    // composites, listed by the word-skipping cursor
    println!("composites below {LIMIT}: {}", composite.dump());

    let twin_starts: Vec<usize> = primes
        .windows(2)
        .filter(|pair| pair[1] - pair[0] == 2)
        .map(|pair| pair[0])
        .collect();
    println!("twin prime pairs start at: {twin_starts:?}");
}
