/*! Word dictionary and spell checking over a chained hash table.

The dictionary stores words in a fixed array of collision chains,
hashing with the classic `hash * 31 + byte` polynomial, and grows the
table when the load factor passes a threshold. Dictionaries load from
and save to plain one-word-per-line text files, and the [`speller`]
module checks the tokens of an arbitrary text file against one.

# Usage example

```
use spelldict::dictionary::Dictionary;

let mut dict = Dictionary::new();
dict.insert("apple")?;
dict.insert("banana")?;
assert!(dict.contains("apple"));
assert!(!dict.contains("cherry"));
# Ok::<(), spelldict::dictionary::DictionaryError>(())
```
*/

#![warn(missing_docs)]

pub mod dictionary;
pub mod speller;
pub mod tokenizer;

pub(crate) mod constants;
