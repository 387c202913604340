// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Set operations over sorted vectors.

// Assumes both vectors are sorted.
pub fn union<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: PartialOrd + Copy,
{
    let mut c: Vec<T> = Vec::with_capacity(a.len() + b.len());
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        if a[ap] < b[bp] {
            c.push(a[ap]);
            ap += 1;
        } else if b[bp] < a[ap] {
            c.push(b[bp]);
            bp += 1;
        } else {
            c.push(a[ap]);
            ap += 1;
            bp += 1;
        }
    }
    c.extend_from_slice(&a[ap..]);
    c.extend_from_slice(&b[bp..]);
    c
}

// Removes adjacent duplicates in place; the vector must be sorted.
pub fn dedupe_sorted<T>(v: &mut Vec<T>)
where
    T: PartialEq + Copy,
{
    let mut i = 0;
    let mut k = 0;
    while i < v.len() {
        v[k] = v[i];
        while i < v.len() && v[k] == v[i] {
            i += 1;
        }
        k += 1;
    }
    v.truncate(k);
}

#[cfg(test)]
mod tests {
    use crate::item::Item;

    fn to_item_vec(nums: &[u32]) -> Vec<Item> {
        nums.iter().map(|&i| Item::with_id(i)).collect()
    }

    #[test]
    fn test_union() {
        use super::union;

        let test_cases: Vec<(Vec<Item>, Vec<Item>, Vec<Item>)> = [
            (vec![1, 2, 3], vec![4, 5, 6], vec![1, 2, 3, 4, 5, 6]),
            (vec![1, 2, 3], vec![3, 4, 5, 6], vec![1, 2, 3, 4, 5, 6]),
            (vec![1, 2], vec![1, 2], vec![1, 2]),
            (vec![], vec![1], vec![1]),
            (vec![1], vec![], vec![1]),
        ]
        .iter()
        .map(|&(ref a, ref b, ref u)| (to_item_vec(a), to_item_vec(b), to_item_vec(u)))
        .collect();

        for &(ref a, ref b, ref c) in &test_cases {
            assert_eq!(&union(a, b), c);
        }
    }

    #[test]
    fn test_dedupe_sorted() {
        let cases = [
            (vec![], vec![]),
            (vec![1], vec![1]),
            (vec![1, 2], vec![1, 2]),
            (vec![1, 1], vec![1]),
            (vec![1, 1, 1], vec![1]),
            (vec![1, 1, 2, 2], vec![1, 2]),
            (vec![1, 2, 3], vec![1, 2, 3]),
            (vec![1, 2, 2, 3], vec![1, 2, 3]),
        ];
        for (mut v, e) in cases.iter().map(|(a, b)| (to_item_vec(a), to_item_vec(b))) {
            super::dedupe_sorted(&mut v);
            assert_eq!(v, e);
        }
    }
}
