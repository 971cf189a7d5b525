//
// bf-genetic - genetic synthesis of Brainfuck programs
//
// File description:
//   Module: one-point crossover.
//

use crate::error::{Result, SynthError};
use crate::genome::{effective_min_program, random_symbols, Genome};
use crate::prng::Prng;

/// Breeds two children from `p1` and `p2` by exchanging tail segments cut
/// somewhere between each parent's first and third quarter.
///
/// If the cuts would produce a child longer than `max_program_size`, both
/// cuts fall back to the midpoint of their respective parent. A child
/// shorter than [`effective_min_program`] is padded with freshly generated
/// random symbols.
pub fn breed(p1: &Genome, p2: &Genome, max_program_size: usize, rng: &mut Prng) -> Result<(Genome, Genome)> {
    let mut p1i = cut_point(p1.len(), rng);
    let mut p2i = cut_point(p2.len(), rng);

    if (max_program_size - p1i) + (max_program_size - p2i) >= max_program_size {
        p1i = p1.len() / 2;
        p2i = p2.len() / 2;
    }

    let mut c1 = Vec::with_capacity(p1i + (p2.len() - p2i));
    c1.extend_from_slice(&p1.text[..p1i]);
    c1.extend_from_slice(&p2.text[p2i..]);

    let mut c2 = Vec::with_capacity(p2i + (p1.len() - p1i));
    c2.extend_from_slice(&p2.text[..p2i]);
    c2.extend_from_slice(&p1.text[p1i..]);

    pad_to_minimum(&mut c1, rng, max_program_size)?;
    pad_to_minimum(&mut c2, rng, max_program_size)?;

    Ok((Genome::new(c1), Genome::new(c2)))
}

/// Picks a cut point uniform in `[len/4, 3*len/4]`.
fn cut_point(len: usize, rng: &mut Prng) -> usize {
    let quarter = (len / 4) as u32;
    rng.rand_range(quarter, quarter * 3) as usize
}

fn pad_to_minimum(text: &mut Vec<u8>, rng: &mut Prng, max_program_size: usize) -> Result<()> {
    let min_program = effective_min_program(max_program_size);
    if text.len() >= min_program {
        return Ok(());
    }
    let needed = min_program - text.len();
    let padding = random_symbols(needed, rng);
    if padding.is_empty() {
        return Err(SynthError::BreedExhausted);
    }
    text.extend_from_slice(&padding);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::MIN_PROGRAM;

    #[test]
    fn children_respect_minimum_length() {
        let mut rng = Prng::new(5);
        let p1 = Genome::random(64, &mut rng);
        let p2 = Genome::random(64, &mut rng);
        let (c1, c2) = breed(&p1, &p2, 64, &mut rng).unwrap();
        assert!(c1.len() >= MIN_PROGRAM);
        assert!(c2.len() >= MIN_PROGRAM);
    }

    #[test]
    fn children_never_exceed_max_program_size() {
        let mut rng = Prng::new(6);
        for _ in 0..200 {
            let p1 = Genome::random(64, &mut rng);
            let p2 = Genome::random(64, &mut rng);
            let (c1, c2) = breed(&p1, &p2, 64, &mut rng).unwrap();
            assert!(c1.len() <= 64 || c1.len() == MIN_PROGRAM);
            assert!(c2.len() <= 64 || c2.len() == MIN_PROGRAM);
        }
    }

    #[test]
    fn breeding_is_deterministic_given_a_seed() {
        let mut rng_a = Prng::new(77);
        let p1_a = Genome::random(64, &mut rng_a);
        let p2_a = Genome::random(64, &mut rng_a);
        let (c1_a, c2_a) = breed(&p1_a, &p2_a, 64, &mut rng_a).unwrap();

        let mut rng_b = Prng::new(77);
        let p1_b = Genome::random(64, &mut rng_b);
        let p2_b = Genome::random(64, &mut rng_b);
        let (c1_b, c2_b) = breed(&p1_b, &p2_b, 64, &mut rng_b).unwrap();

        assert_eq!(c1_a.text, c1_b.text);
        assert_eq!(c2_a.text, c2_b.text);
    }

    #[test]
    fn breeding_degrades_gracefully_below_min_program() {
        let mut rng = Prng::new(8);
        for max_len in 2..MIN_PROGRAM {
            let p1 = Genome::random(max_len, &mut rng);
            let p2 = Genome::random(max_len, &mut rng);
            let (c1, c2) = breed(&p1, &p2, max_len, &mut rng).unwrap();
            assert!(c1.len() <= max_len);
            assert!(c2.len() <= max_len);
        }
    }
}
